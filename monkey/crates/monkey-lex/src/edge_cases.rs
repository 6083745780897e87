//! Edge case tests for monkey-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_bytes, LexConfig, Scanner, Token, TokenKind};
    use monkey_util::DiagnosticCode;

    fn lex_all(source: &str) -> Vec<Token> {
        Scanner::new("edge", source).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    fn positions(source: &str) -> Vec<(u32, u32)> {
        lex_all(source).iter().map(|t| (t.line, t.column)).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t.len(), 1);
        assert_eq!((t[0].kind, t[0].text.as_str()), (TokenKind::Identifier, "x"));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {} = 1;", name));
        assert_eq!(t[1].text, name);
        assert_eq!(t[2].column, 10005);
    }

    #[test]
    fn test_edge_fn_digit_is_identifier() {
        assert_eq!(kinds("fn1"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("fn 1"), vec![TokenKind::Function, TokenKind::Integer]);
    }

    #[test]
    fn test_edge_emoji_identifiers() {
        let t = lex_all("let 🐒 = 🍌;");
        assert_eq!(t[1].text, "🐒");
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[2].column, 6);
        assert_eq!(t[3].text, "🍌");
        assert_eq!(t[4].column, 9);
    }

    #[test]
    fn test_edge_emoji_with_variation_selector() {
        // U+2764 U+FE0F: the selector is Mn, not a symbol
        let t = lex_all("\u{2764}\u{FE0F}");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].text, "\u{2764}");
        assert_eq!(t[1].kind, TokenKind::Illegal);
        assert_eq!(t[1].column, 1);
    }

    #[test]
    fn test_edge_dangling_dot() {
        assert_eq!(kinds("5."), vec![TokenKind::Integer, TokenKind::Illegal]);
        assert_eq!(
            kinds("5.x"),
            vec![TokenKind::Integer, TokenKind::Illegal, TokenKind::Identifier]
        );
        assert_eq!(kinds("5 6"), vec![TokenKind::Integer, TokenKind::Integer]);
        assert_eq!(kinds("5 .6"), vec![TokenKind::Integer, TokenKind::Illegal, TokenKind::Integer]);
    }

    #[test]
    fn test_edge_all_two_char_operators_packed() {
        assert_eq!(
            kinds("==!=<=>="),
            vec![TokenKind::Eq, TokenKind::NotEq, TokenKind::Lte, TokenKind::Gte]
        );
        assert_eq!(positions("==!=<=>="), vec![(1, 0), (1, 2), (1, 4), (1, 6)]);
    }

    #[test]
    fn test_edge_operator_before_newline() {
        // the `=` after a newline never pairs with the `<`
        assert_eq!(kinds("<\n="), vec![TokenKind::Lt, TokenKind::Assign]);
        assert_eq!(positions("<\n="), vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn test_edge_illegal_characters_continue() {
        let t = lex_all("@#$ x");
        let k: Vec<TokenKind> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            k,
            vec![
                TokenKind::Illegal,
                TokenKind::Illegal,
                TokenKind::Illegal,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(t[2].text, "$");
        assert_eq!(t[3].column, 4);
    }

    #[test]
    fn test_edge_each_illegal_is_reported() {
        let mut scanner = Scanner::new("edge", "a ? b ? c");
        let _ = scanner.by_ref().count();
        let diags = scanner.into_diagnostics();
        assert_eq!(diags.len(), 2);
        assert!(diags
            .iter()
            .all(|d| d.code == Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)));
        assert_eq!(diags[1].span.column, 6);
    }

    #[test]
    fn test_edge_report_illegal_disabled() {
        let config = LexConfig::default().with_report_illegal(false);
        let mut scanner = Scanner::with_config("edge", "?", config);
        assert_eq!(scanner.next_token().kind, TokenKind::Illegal);
        assert_eq!(scanner.next_token().kind, TokenKind::End);
        assert!(scanner.into_diagnostics().is_empty());
    }

    #[test]
    fn test_edge_ascii_symbols_are_not_identifiers() {
        for source in ["$x", "^x", "|x", "~x", "`x"] {
            let t = lex_all(source);
            assert_eq!(t.len(), 2, "{source:?}");
            assert_eq!(t[0].kind, TokenKind::Illegal, "{source:?}");
            assert_eq!((t[1].kind, t[1].text.as_str()), (TokenKind::Identifier, "x"));
        }
        // the same scripts outside ASCII are identifier characters
        assert_eq!(kinds("€x"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_non_breaking_space_is_illegal() {
        assert_eq!(
            kinds("a\u{00A0}b"),
            vec![TokenKind::Identifier, TokenKind::Illegal, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let source = "let x\r\n= 5;\r\n";
        assert_eq!(positions(source), vec![(1, 0), (1, 4), (2, 0), (2, 2), (2, 3)]);
        let end = tokenize("edge", source).pop().unwrap();
        assert_eq!((end.kind, end.line, end.column), (TokenKind::End, 3, 0));
    }

    #[test]
    fn test_edge_blank_lines() {
        assert_eq!(positions("a\n\n\n  b"), vec![(1, 0), (4, 2)]);
    }

    #[test]
    fn test_edge_tab_counts_one_column() {
        assert_eq!(positions("\t\tx"), vec![(1, 2)]);
    }

    #[test]
    fn test_edge_column_base_one() {
        let config = LexConfig::default().with_column_base(1);
        let t: Vec<Token> = Scanner::with_config("edge", "let x\n= 5;", config).collect();
        let pos: Vec<(u32, u32)> = t.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(pos, vec![(1, 1), (1, 5), (2, 1), (2, 3), (2, 4)]);
    }

    #[test]
    fn test_edge_end_position_after_trailing_text() {
        let end = tokenize("edge", "abc").pop().unwrap();
        assert_eq!((end.kind, end.line, end.column), (TokenKind::End, 1, 3));
    }

    #[test]
    fn test_edge_decode_error_at_start() {
        let t = tokenize_bytes("edge", &[0xFF]);
        assert_eq!(t.len(), 1);
        assert_eq!((t[0].kind, t[0].line, t[0].column), (TokenKind::Error, 1, 0));
    }

    #[test]
    fn test_edge_decode_error_idempotent() {
        let mut scanner = Scanner::from_bytes("edge", b"let\n\xC3");
        assert_eq!(scanner.next_token().kind, TokenKind::Let);
        let first = scanner.next_token();
        assert_eq!((first.kind, first.line, first.column), (TokenKind::Error, 2, 0));
        for _ in 0..3 {
            assert_eq!(scanner.next_token(), first);
        }
        assert_eq!(scanner.handler().len(), 1);
    }

    #[test]
    fn test_edge_decode_error_hides_later_valid_text() {
        // valid text after the bad byte is never scanned
        let t = tokenize_bytes("edge", b"a \x80 b c d");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].kind, TokenKind::Error);
    }

    #[test]
    fn test_edge_valid_multibyte_bytes() {
        let t = tokenize_bytes("edge", "größe = 1".as_bytes());
        assert_eq!(t[0].text, "größe");
        assert_eq!(t[1].column, 6);
        assert_eq!(t.last().map(|t| t.kind), Some(TokenKind::End));
    }

    #[test]
    fn test_edge_overlong_encoding_rejected() {
        // 0xC0 0xAF is an overlong `/`
        let t = tokenize_bytes("edge", &[b'1', 0xC0, 0xAF]);
        assert_eq!(t[0].kind, TokenKind::Integer);
        assert_eq!(t[1].kind, TokenKind::Error);
    }

    #[test]
    fn test_edge_surrogate_encoding_rejected() {
        let t = tokenize_bytes("edge", &[0xED, 0xA0, 0x80]);
        assert_eq!(t[0].kind, TokenKind::Error);
    }

    #[test]
    fn test_edge_bom_is_illegal() {
        let t = tokenize("edge", "\u{FEFF}let");
        assert_eq!(t[0].kind, TokenKind::Illegal);
        assert_eq!((t[1].kind, t[1].column), (TokenKind::Let, 1));
    }

    // ========================================================================
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ========================================================================

    const WORDS: &[&str] = &[
        "let", "fn", "if", "else", "return", "true", "false", "x", "foo_1", "λ", "🐒", "5", "42",
        "3.14", "==", "!=", "<=", ">=", "=", "!", "<", ">", "+", "-", "*", "/", ";", ",", "{",
        "}", "(", ")",
    ];

    #[test]
    fn test_proptest_whitespace_is_transparent() {
        use proptest::prelude::*;

        let word_lists = prop::collection::vec(prop::sample::select(WORDS), 0..40);
        let gap_lists = prop::collection::vec("[ \t\r\n]{1,4}", 40);
        proptest!(|(words in word_lists, gaps in gap_lists)| {
            let spaced = words.join(" ");
            let mut ragged = String::new();
            for (word, gap) in words.iter().zip(&gaps) {
                ragged.push_str(gap);
                ragged.push_str(word);
            }

            let a: Vec<(TokenKind, String)> =
                lex_all(&spaced).into_iter().map(|t| (t.kind, t.text)).collect();
            let b: Vec<(TokenKind, String)> =
                lex_all(&ragged).into_iter().map(|t| (t.kind, t.text)).collect();
            prop_assert_eq!(&a, &b);

            let texts: Vec<&str> = a.iter().map(|(_, text)| text.as_str()).collect();
            prop_assert_eq!(texts, words);
        });
    }

    #[test]
    fn test_proptest_texts_cover_input() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            let joined: String = lex_all(&input).into_iter().map(|t| t.text).collect();
            let expected: String = input.chars().filter(|c| !crate::is_whitespace(*c)).collect();
            prop_assert_eq!(joined, expected);
        });
    }

    #[test]
    fn test_proptest_positions_increase() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 \n=!<>.+@🐒]{0,200}")| {
            let tokens = tokenize("prop", &input);
            for pair in tokens.windows(2) {
                let before = (pair[0].line, pair[0].column);
                let after = (pair[1].line, pair[1].column);
                prop_assert!(before < after, "{:?} then {:?}", pair[0], pair[1]);
            }
        });
    }

    #[test]
    fn test_proptest_end_is_idempotent() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,100}")| {
            let mut scanner = Scanner::new("prop", &input);
            let end = loop {
                let token = scanner.next_token();
                if token.kind == TokenKind::End {
                    break token;
                }
            };
            prop_assert_eq!(scanner.next_token(), end.clone());
            prop_assert_eq!(scanner.next_token(), end);
        });
    }

    #[test]
    fn test_proptest_arbitrary_bytes_terminate() {
        use proptest::prelude::*;

        proptest!(|(bytes in prop::collection::vec(any::<u8>(), 0..200))| {
            let tokens = tokenize_bytes("prop", &bytes);
            prop_assert_eq!(tokens.iter().filter(|t| t.is_terminal()).count(), 1);

            let last = tokens.last().map(|t| t.kind);
            let expected = if std::str::from_utf8(&bytes).is_ok() {
                TokenKind::End
            } else {
                TokenKind::Error
            };
            prop_assert_eq!(last, Some(expected));
        });
    }

    #[test]
    fn test_proptest_identifiers_roundtrip() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].text, &input);
            let expected = crate::lookup_ident(&input);
            prop_assert_eq!(tokens[0].kind, expected);
        });
    }
}
