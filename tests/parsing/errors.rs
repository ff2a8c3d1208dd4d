#[cfg(test)]
mod errors {
    use accounts::language::Value;
    use accounts::parsing::{parse_str, ParsingError, Problem};

    fn preamble() -> String {
        format!("{}\n>>Online\n{}\n>Accounts\n", "=".repeat(20), "-".repeat(20))
    }

    /// Parse the body underneath the usual headings and check that exactly
    /// the expected problem was reported, on the given line of the body.
    fn expect_error(body: &str, expected: Problem, line: usize) -> ParsingError {
        let document = parse_str(&(preamble() + body));

        match document
            .errors
            .as_slice()
        {
            [error] => {
                assert_eq!(error.problem, expected, "for input '{}'", body);
                assert_eq!(error.line, Some(line + 4), "for input '{}'", body);
                error.clone()
            }
            errors => panic!(
                "Expected a single {:?} but got: {:?} for input '{}'",
                expected, errors, body
            ),
        }
    }

    #[test]
    fn duplicate_field() {
        let error = expect_error(
            "example.com:\n\tphone:\tHome\n\tphone:\tWork\n",
            Problem::DuplicateKey,
            3,
        );
        assert_eq!(error.raw.as_deref(), Some("\tphone:\tWork"));

        let document = parse_str(&(preamble() + "example.com:\n\tphone:\tHome\n\tphone:\tWork\n"));
        assert_eq!(
            document.entries[0].get("phone"),
            Some(&Value::Text("Home".to_string()))
        );
    }

    #[test]
    fn duplicate_flag() {
        expect_error(
            "example.com:\n\t**used credit card**\n  *used credit card*\n",
            Problem::DuplicateKey,
            3,
        );
    }

    #[test]
    fn same_field_elsewhere_is_fine() {
        let document = parse_str(
            &(preamble()
                + "example.com:\n\tphone:\tHome\n    [old]\n\tphone:\tWork\n  {account 1}\n\tphone:\tMobile\nother.com:\n\tphone:\tHome\n"),
        );

        assert!(document.is_clean());
    }

    #[test]
    fn unrecognized_line() {
        let error = expect_error(
            "example.com:\n\tjust some words\n",
            Problem::Unrecognized,
            2,
        );
        assert_eq!(error.message(), "Unrecognized line");
    }

    #[test]
    fn malformed_header_discards_entry() {
        let body = "example.com:\n\ta:\t1\nNot A Header\n\tb:\t2\nnext.com:\n\tc:\t3\n";
        expect_error(body, Problem::MalformedEntryHeader, 3);

        let document = parse_str(&(preamble() + body));
        let sites: Vec<_> = document
            .entries
            .iter()
            .map(|entry| entry.site.as_str())
            .collect();
        assert_eq!(sites, vec!["next.com"]);
    }

    #[test]
    fn account_out_of_range() {
        expect_error(
            "example.com:\n  {account 4294967296}\n",
            Problem::AccountOutOfRange,
            2,
        );
    }

    #[test]
    fn no_top_level_headings() {
        let document = parse_str("example.com:\n\tusername:\tbob\n>>Online\n");

        assert!(document
            .entries
            .is_empty());
        assert_eq!(
            document.errors,
            vec![ParsingError::whole(Problem::NoTopLevelHeadings)]
        );
        assert_eq!(document.errors[0].line, None);
        assert_eq!(
            document.errors[0].message(),
            "Found no top-level section headings"
        );
    }

    #[test]
    fn errors_in_order() {
        let document = parse_str(
            &(preamble() + "example.com:\n\t???\n\ta:\t1\n\ta:\t2\n  {account 9999999999}\n"),
        );

        let problems: Vec<_> = document
            .errors
            .iter()
            .map(|error| (error.problem.clone(), error.line))
            .collect();
        assert_eq!(
            problems,
            vec![
                (Problem::Unrecognized, Some(6)),
                (Problem::DuplicateKey, Some(8)),
                (Problem::AccountOutOfRange, Some(9)),
            ]
        );
    }

    #[test]
    fn json_shape() {
        let error = ParsingError::at(Problem::Unrecognized, 12, "\t???");
        let value = serde_json::to_value(&error).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "message": "Unrecognized line",
                "line": 12,
                "raw": "\t???",
            })
        );
    }
}
