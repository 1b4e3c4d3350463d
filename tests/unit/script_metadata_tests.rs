/*!
 * Tests for the syntax-level metadata extractor
 */

use scriptdoc::errors::MetadataError;
use scriptdoc::script_metadata::{MetaValue, ScriptMetadata};

/// Test extraction from a minimal well-formed script
#[test]
fn test_extract_withThreeStringLiterals_shouldReturnMetadata() {
    let source = "__author__ = 'X'\n__date__ = '2021.01.01'\n\n\"\"\"does A\"\"\"\n\nprint('code')\n";

    let meta = ScriptMetadata::extract("a.py", source).unwrap();

    assert_eq!(meta.author, MetaValue::Str("X".to_string()));
    assert_eq!(meta.date, "2021.01.01");
    assert_eq!(meta.description, "does A");
}

/// Test extraction with a list-of-strings author
#[test]
fn test_extract_withListAuthor_shouldReturnListValue() {
    let source = "__author__ = ['Y', 'Z']\n__date__ = '2021.02.02'\n\"\"\"does B\"\"\"\n";

    let meta = ScriptMetadata::extract("b.py", source).unwrap();

    assert_eq!(
        meta.author,
        MetaValue::List(vec!["Y".to_string(), "Z".to_string()])
    );
    assert_eq!(meta.author.to_string(), "Y, Z");
}

/// Test that a multi-line list with a trailing comma is accepted
#[test]
fn test_extract_withMultiLineListAuthor_shouldReturnListValue() {
    let source = "__author__ = [\n    'Y',\n    'Z',\n]\n__date__ = '2021.02.02'\n'''does B'''\n";

    let meta = ScriptMetadata::extract("b.py", source).unwrap();

    assert_eq!(
        meta.author,
        MetaValue::List(vec!["Y".to_string(), "Z".to_string()])
    );
}

/// Test that comments and blank lines before declarations are skipped
#[test]
fn test_extract_withLeadingCommentsAndBlankLines_shouldSkipThem() {
    let source = "#!/usr/bin/env python\n# metadata below\n\n__author__ = 'X'  # inline note\n\n__date__ = '2020.06.21'\n\n\"\"\"desc\"\"\"\n";

    let meta = ScriptMetadata::extract("a.py", source).unwrap();

    assert_eq!(meta.author, MetaValue::Str("X".to_string()));
    assert_eq!(meta.date, "2020.06.21");
    assert_eq!(meta.description, "desc");
}

/// Test that a multi-line triple-quoted description is kept verbatim
#[test]
fn test_extract_withMultiLineDescription_shouldKeepLineBreaks() {
    let source = "__author__ = 'X'\n__date__ = '2020.06.21'\n\n\"\"\"\nThis module does A.\nIt also does B.\n\"\"\"\n";

    let meta = ScriptMetadata::extract("a.py", source).unwrap();

    assert_eq!(meta.description, "\nThis module does A.\nIt also does B.\n");
}

/// Test that embedded quotes inside a triple-quoted string survive
#[test]
fn test_extract_withQuotesInsideTripleQuotedString_shouldKeepThem() {
    let source = "__author__ = 'X'\n__date__ = '2020.06.21'\n\"\"\"He said \"hi\" once\"\"\"\n";

    let meta = ScriptMetadata::extract("a.py", source).unwrap();

    assert_eq!(meta.description, "He said \"hi\" once");
}

/// Test common escape sequences in string literals
#[test]
fn test_extract_withEscapedQuote_shouldUnescape() {
    let source = "__author__ = 'It\\'s me'\n__date__ = '2020.06.21'\n'''desc'''\n";

    let meta = ScriptMetadata::extract("a.py", source).unwrap();

    assert_eq!(meta.author, MetaValue::Str("It's me".to_string()));
}

/// Test that bare literal expressions qualify as declarations
#[test]
fn test_extract_withBareLiteralStatements_shouldReturnMetadata() {
    let source = "'X'\n'2021.01.01'\n'does A'\n";

    let meta = ScriptMetadata::extract("a.py", source).unwrap();

    assert_eq!(meta.author, MetaValue::Str("X".to_string()));
}

/// Test that a script with code after a single declaration fails
#[test]
fn test_extract_withCodeAfterOneDeclaration_shouldFailWithNotALiteral() {
    let source = "__author__ = 'X'\nimport os\n\nprint(os.getcwd())\n";

    let result = ScriptMetadata::extract("a.py", source);

    assert!(matches!(
        result,
        Err(MetadataError::NotALiteral { index: 2, .. })
    ));
}

/// Test that a script ending after two declarations fails
#[test]
fn test_extract_withOnlyTwoDeclarations_shouldFailWithTooFew() {
    let source = "__author__ = 'X'\n__date__ = '2021.01.01'\n";

    let result = ScriptMetadata::extract("a.py", source);

    assert!(matches!(
        result,
        Err(MetadataError::TooFewDeclarations { found: 2, .. })
    ));
}

/// Test that an empty file fails with zero declarations found
#[test]
fn test_extract_withEmptySource_shouldFailWithTooFew() {
    let result = ScriptMetadata::extract("a.py", "");

    assert!(matches!(
        result,
        Err(MetadataError::TooFewDeclarations { found: 0, .. })
    ));
}

/// Test that a computed value is rejected without being evaluated
#[test]
fn test_extract_withComputedValue_shouldFailWithNotALiteral() {
    let source = "__author__ = get_author()\n__date__ = '2021.01.01'\n'''desc'''\n";

    let result = ScriptMetadata::extract("a.py", source);

    assert!(matches!(
        result,
        Err(MetadataError::NotALiteral { index: 1, .. })
    ));
}

/// Test that a numeric literal does not qualify
#[test]
fn test_extract_withNumericLiteral_shouldFailWithNotALiteral() {
    let source = "__author__ = 42\n__date__ = '2021.01.01'\n'''desc'''\n";

    let result = ScriptMetadata::extract("a.py", source);

    assert!(matches!(
        result,
        Err(MetadataError::NotALiteral { index: 1, .. })
    ));
}

/// Test that a list date is rejected with the offending field named
#[test]
fn test_extract_withListDate_shouldFailWithWrongShape() {
    let source = "__author__ = 'X'\n__date__ = ['2021']\n'''desc'''\n";

    let result = ScriptMetadata::extract("a.py", source);

    assert!(matches!(
        result,
        Err(MetadataError::WrongShape { field: "date", .. })
    ));
}

/// Test that a list description is rejected
#[test]
fn test_extract_withListDescription_shouldFailWithWrongShape() {
    let source = "__author__ = 'X'\n__date__ = '2021.01.01'\n__doc__ = ['a', 'b']\n";

    let result = ScriptMetadata::extract("a.py", source);

    assert!(matches!(
        result,
        Err(MetadataError::WrongShape { field: "description", .. })
    ));
}

/// Test that an unterminated single-quoted string is rejected
#[test]
fn test_extract_withUnterminatedString_shouldFailWithNotALiteral() {
    let source = "__author__ = 'X\n__date__ = '2021.01.01'\n'''desc'''\n";

    let result = ScriptMetadata::extract("a.py", source);

    assert!(matches!(
        result,
        Err(MetadataError::NotALiteral { index: 1, .. })
    ));
}

/// Test that a list containing a non-string element is rejected
#[test]
fn test_extract_withNonStringListElement_shouldFailWithNotALiteral() {
    let source = "__author__ = ['Y', 7]\n__date__ = '2021.01.01'\n'''desc'''\n";

    let result = ScriptMetadata::extract("a.py", source);

    assert!(matches!(
        result,
        Err(MetadataError::NotALiteral { index: 1, .. })
    ));
}

/// Test that trailing tokens after a literal are rejected
#[test]
fn test_extract_withTrailingTokens_shouldFailWithNotALiteral() {
    let source = "__author__ = 'X' + '!'\n__date__ = '2021.01.01'\n'''desc'''\n";

    let result = ScriptMetadata::extract("a.py", source);

    assert!(matches!(
        result,
        Err(MetadataError::NotALiteral { index: 1, .. })
    ));
}
