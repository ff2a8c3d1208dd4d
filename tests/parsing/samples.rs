#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use accounts::parsing;

    /// Every .txt file in the given directory.
    fn collect(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in {:?}", dir);
        files.sort();
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let mut failures = Vec::new();

        for file in collect(Path::new("tests/samples/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let document = parsing::parse(&content);
            if !document.is_clean() {
                println!("File {:?} had problems: {:?}", file, document.errors);
                failures.push(file.clone());
            }
            if document
                .entries
                .is_empty()
            {
                println!("File {:?} had no entries", file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse cleanly, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let mut unexpected_successes = Vec::new();

        for file in collect(Path::new("tests/broken/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            if parsing::parse(&content).is_clean() {
                println!("File {:?} unexpectedly parsed cleanly", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should report problems, but {} files parsed cleanly",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn basic_sample() {
        let content = parsing::load(Path::new("tests/samples/basic.txt")).unwrap();
        let document = parsing::parse(&content);

        let sites: Vec<_> = document
            .entries
            .iter()
            .map(|entry| entry.site.as_str())
            .collect();
        assert_eq!(
            sites,
            vec!["example.com", "https://bank.example.org", "shop.example.net"]
        );

        let bank = &document.entries[1];
        assert_eq!(bank.site_alias.as_deref(), Some("Checking"));
        assert_eq!(bank.accounts(), vec![0, 1]);
        assert_eq!(bank.sections(1), vec!["default", "security questions"]);
    }

    #[test]
    fn legacy_sample() {
        let content = parsing::load(Path::new("tests/samples/legacy.txt")).unwrap();
        let document = parsing::parse(&content);

        let bank = &document.entries[0];
        assert_eq!(bank.site, "www.examplebank.com");
        assert_eq!(bank.site_alias.as_deref(), Some("Example Bank"));
        assert!(bank.contains((0, "Old account", "username")));
        assert!(bank.contains((0, "Old account", "used credit card")));
        assert!(bank.contains((0, "Old account", "url")));

        let forum = &document.entries[1];
        assert!(forum.contains((2, "default", "email")));
    }

    #[test]
    fn missing_file() {
        let error = parsing::load(Path::new("tests/samples/nonexistent.txt")).unwrap_err();

        assert_eq!(error.problem, "File not found");
        assert_eq!(error.to_string(), "File not found");
    }
}
