//! Unicode utilities for the Monkey scanner.
//!
//! Character classes used by the scanner's dispatch:
//!
//! - identifier characters: ASCII letters, `_`, and any non-ASCII code point
//!   in the Letter (`L*`) or Symbol (`S*`) general categories, so emoji and
//!   mathematical symbols can name things;
//! - digits: the Decimal Number (`Nd`) general category;
//! - whitespace: space, tab, carriage return, newline.
//!
//! The Symbol rule applies only outside ASCII. Every ASCII symbol is left out
//! of the identifier class: the operators `+ < = >` and also `$ ^ | ~` and the
//! backtick, which start no token and scan as ILLEGAL. So `a+b` is three tokens
//! and `$x` is ILLEGAL `$` followed by IDENTIFIER `x`.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use monkey_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));   // Greek letter
/// assert!(is_ident_start('😀'));  // So: other symbol
/// assert!(is_ident_start('∑'));   // Sm: math symbol
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// assert!(!is_ident_start('$'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic() || c == '_';
    }
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Symbol
    )
}

/// Checks if a character can continue an identifier.
///
/// Every start character qualifies, and so does any decimal digit: a reserved
/// word followed by a digit, such as `fn1`, is one identifier.
///
/// # Example
///
/// ```
/// use monkey_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('x'));
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('🙈'));
/// assert!(!is_ident_continue('='));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c)
}

/// Checks if a character is a decimal digit in any script.
///
/// # Example
///
/// ```
/// use monkey_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('٣'));  // Arabic-Indic three
/// assert!(!is_digit('x'));
/// assert!(!is_digit('½')); // No: other number, not decimal
/// ```
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Checks if a character is skipped between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
