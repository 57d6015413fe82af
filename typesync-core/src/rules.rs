//! Substitution rule tables.
//!
//! Every rule is a literal substring replacement applied to all occurrences
//! on a line. Rules within a group run in order, each on the output of the
//! previous one.

/// A single `(pattern, replacement)` substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl Rule {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    /// Replace every occurrence of the pattern in `line`.
    pub fn apply(&self, line: &str) -> String {
        line.replace(self.pattern, self.replacement)
    }
}

const TYPE_DEFINITION: &[Rule] = &[
    Rule::new("pub struct", "export type"),
    Rule::new("pub type", "export type"),
    Rule::new("{", "= {"),
];

const ENUM_DEFINITION: &[Rule] = &[Rule::new("pub enum", "export enum")];

const FIELD_DEFINITION: &[Rule] = &[Rule::new("pub", "")];

const OPTIONAL_FIELD: &[Rule] = &[Rule::new(": Option<", "?: "), Rule::new(">,", ",")];

const STYLE: &[Rule] = &[
    Rule::new("String", "string"),
    Rule::new("Vec", "Array"),
    Rule::new("u8", "number"),
    Rule::new("usize", "number"),
    Rule::new("HashSet", "Array"),
    Rule::new("HashMap", "Record"),
    Rule::new(";", ""),
];

/// Named, ordered groups of substitution rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleGroup {
    /// `pub struct` / `pub type` headers.
    TypeDefinition,
    /// `pub enum` headers.
    EnumDefinition,
    /// Fields, variants and anything else.
    FieldDefinition,
    /// `Option<T>` fields, rewritten to `name?: T`.
    OptionalField,
    /// Primitive and container renames plus `;` removal. Runs on every line.
    Style,
}

impl RuleGroup {
    pub fn name(&self) -> &'static str {
        match self {
            RuleGroup::TypeDefinition => "type-definition",
            RuleGroup::EnumDefinition => "enum-definition",
            RuleGroup::FieldDefinition => "field-definition",
            RuleGroup::OptionalField => "optional-field",
            RuleGroup::Style => "style",
        }
    }

    /// The rules of this group, in application order.
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            RuleGroup::TypeDefinition => TYPE_DEFINITION,
            RuleGroup::EnumDefinition => ENUM_DEFINITION,
            RuleGroup::FieldDefinition => FIELD_DEFINITION,
            RuleGroup::OptionalField => OPTIONAL_FIELD,
            RuleGroup::Style => STYLE,
        }
    }

    /// Apply every rule of the group to `line`, in order.
    pub fn apply(&self, line: &str) -> String {
        self.rules()
            .iter()
            .fold(line.to_string(), |acc, rule| rule.apply(&acc))
    }
}

impl std::fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
