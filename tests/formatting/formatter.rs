#[cfg(test)]
mod formatter {
    use std::path::Path;

    use accounts::formatting::*;
    use accounts::language::{Entry, Value};
    use accounts::parsing;

    fn preamble() -> String {
        format!("{}\n>>Online\n{}\n>Accounts\n", "=".repeat(20), "-".repeat(20))
    }

    fn reparse(entries: &[Entry]) -> Vec<Entry> {
        let written = render(&Identity, entries);
        let document = parsing::parse(&(preamble() + &written));

        assert!(
            document.is_clean(),
            "rewritten output had problems: {:?}\n{}",
            document.errors,
            written
        );
        document.entries
    }

    #[test]
    fn samples_survive_rewriting() {
        for name in ["basic.txt", "legacy.txt"] {
            let path = Path::new("tests/samples/").join(name);
            let content = parsing::load(&path).unwrap();
            let document = parsing::parse(&content);

            assert_eq!(reparse(&document.entries), document.entries, "{}", name);
        }
    }

    #[test]
    fn legacy_lines_come_out_canonical() {
        let content = preamble() + "Example Bank:\nwww.examplebank.com\n    Old account:\n\tQLN\n  *used credit card here*\n";
        let document = parsing::parse(&content);

        assert_eq!(
            render(&Identity, &document.entries),
            "www.examplebank.com (Example Bank):\n    [Old account]\n\tusername:\tqwerty0\n\tpassword:\tleast secure\n\temail:\tnmapsy\n\t**used credit card**\n"
        );
    }

    #[test]
    fn built_entries_survive_rewriting() {
        let mut entry = Entry::new("example.com");
        entry.site_alias = Some("Work".to_string());
        entry
            .set((2, "old", "phone"), Value::List(vec!["1".to_string(), "2".to_string()]))
            .unwrap();
        entry
            .set((2, "default", "closed"), Value::Flag)
            .unwrap();
        entry
            .set((0, "default", "pin"), Value::Text("0000".to_string()))
            .unwrap();

        let entries = vec![entry, Entry::new("empty.example.com")];

        assert_eq!(reparse(&entries), entries);
    }

    #[test]
    fn terminal_output_is_styled() {
        let mut entry = Entry::new("example.com");
        entry
            .set("username", Value::Text("bob".to_string()))
            .unwrap();

        let plain = render(&Identity, std::slice::from_ref(&entry));
        let styled = render(&Terminal, std::slice::from_ref(&entry));

        assert!(styled.contains('\x1b'));
        assert!(!plain.contains('\x1b'));
        assert!(styled.contains("bob"));
    }
}
