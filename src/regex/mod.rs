// Compiled regular expressions, built once on first use

mod cache;
