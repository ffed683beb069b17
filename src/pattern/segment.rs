/// One piece of a parsed path pattern.
///
/// Literal text may span `/` boundaries; a parameter never does. The
/// sequence always alternates (no two adjacent literals), which the
/// parser guarantees by accumulating literal runs into a single segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    Literal(String),
    Param {
        name: String,
        constraint: Option<Box<str>>,
    },
}

impl PatternSegment {
    pub fn is_literal(&self) -> bool {
        matches!(self, PatternSegment::Literal(_))
    }

    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Param { name, .. } => Some(name),
            PatternSegment::Literal(_) => None,
        }
    }
}
