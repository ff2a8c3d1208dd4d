#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use accounts::formatting::*;
    use accounts::parsing;

    /// Golden test for the canonical layout
    ///
    /// Each .txt file in tests/golden/ holds entries already written in the
    /// canonical form. Placed under the Online / Accounts headings, parsed,
    /// and written back out, each must come back unchanged. If one doesn't,
    /// either the parser or formatter is wrong or the golden file is no
    /// longer canonical and needs rewriting.

    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        println!("\nDifferences in {:?}:", file_path);
        let max = original_lines
            .len()
            .max(formatted_lines.len());
        for i in 0..max {
            let before = original_lines
                .get(i)
                .copied();
            let after = formatted_lines
                .get(i)
                .copied();
            if before != after {
                println!("{:4} - {:?}", i + 1, before.unwrap_or(""));
                println!("{:4} + {:?}", i + 1, after.unwrap_or(""));
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden/");
        assert!(dir.exists(), "golden directory missing");

        let mut files: Vec<_> = fs::read_dir(dir)
            .expect("Failed to read golden directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .path()
            })
            .filter(|path| {
                path.extension()
                    .and_then(|s| s.to_str())
                    == Some("txt")
            })
            .collect();
        files.sort();

        assert!(!files.is_empty(), "No .txt files found in golden directory");

        let preamble = format!("{}\n>>Online\n{}\n>Accounts\n", "=".repeat(20), "-".repeat(20));
        let mut failures = Vec::new();

        for file in &files {
            let original = parsing::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let document = parsing::parse(&(preamble.clone() + &original));
            assert!(
                document.is_clean(),
                "Golden file {:?} had problems: {:?}",
                file,
                document.errors
            );

            let result = render(&Identity, &document.entries);

            if result != original {
                show_diff(&original, &result, file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Golden files should be in canonical form, but {} differed",
                failures.len()
            );
        }
    }
}
