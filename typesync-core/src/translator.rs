//! Line-by-line Rust to TypeScript translation.

use tracing::trace;

use crate::rules::RuleGroup;

/// Substrings that mark a struct or type alias header.
const TYPE_DEFINITION_MARKERS: [&str; 2] = ["struct", "type"];

/// Substring that marks an enum header.
const ENUM_DEFINITION_MARKER: &str = "enum";

/// Classification of a source line.
///
/// Decided by plain substring containment, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    TypeDefinition,
    EnumDefinition,
    FieldDefinition,
}

impl LineClass {
    /// Classify a line.
    pub fn of(line: &str) -> Self {
        if TYPE_DEFINITION_MARKERS.iter().any(|m| line.contains(m)) {
            LineClass::TypeDefinition
        } else if line.contains(ENUM_DEFINITION_MARKER) {
            LineClass::EnumDefinition
        } else {
            LineClass::FieldDefinition
        }
    }

    /// The rule group applied to lines of this class.
    pub fn rule_group(&self) -> RuleGroup {
        match self {
            LineClass::TypeDefinition => RuleGroup::TypeDefinition,
            LineClass::EnumDefinition => RuleGroup::EnumDefinition,
            LineClass::FieldDefinition => RuleGroup::FieldDefinition,
        }
    }
}

/// Translates single lines of Rust type definitions into TypeScript.
///
/// Stateless: the output depends only on the input line and the fixed rule
/// tables. The line terminator, if any, is carried through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTranslator;

impl LineTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate one line.
    pub fn translate(&self, line: &str) -> String {
        let class = LineClass::of(line);
        let group = class.rule_group();
        let mut out = group.apply(line);

        let optional = Self::optional_marker();
        let has_optional = out.contains(optional);
        if has_optional {
            out = RuleGroup::OptionalField.apply(&out);
        }

        let out = RuleGroup::Style.apply(&out);
        trace!(?class, %group, optional = has_optional, "translated line");
        out
    }

    /// Translate a sequence of lines, preserving order and count.
    pub fn translate_all<'a, I>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().map(|l| self.translate(l)).collect()
    }

    /// The optional-field pass only runs when its first pattern is present.
    fn optional_marker() -> &'static str {
        RuleGroup::OptionalField.rules()[0].pattern
    }
}
