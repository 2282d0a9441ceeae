use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// An editable employee field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Dob,
    Role,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FullName, Field::Dob, Field::Role];

    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Dob => "DOB",
            Field::Role => "role",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn dob_pattern() -> &'static Regex {
    static DOB: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also admit other Unicode digits.
    DOB.get_or_init(|| Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$").expect("valid DOB pattern"))
}

/// Syntactic check only: `13/45/2001` passes.
pub fn is_valid_dob(candidate: &str) -> bool {
    dob_pattern().is_match(candidate)
}

pub fn is_valid(field: Field, candidate: &str) -> bool {
    match field {
        Field::FullName | Field::Role => !candidate.is_empty(),
        Field::Dob => is_valid_dob(candidate),
    }
}
