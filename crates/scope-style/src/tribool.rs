/// A boolean that may be left unspecified.
///
/// During the cascade an unset value defers to the less specific rule,
/// whereas an explicit `False` overrides it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TriBool {
    #[default]
    Unset,
    True,
    False,
}

impl TriBool {
    /// Returns `self` when set, otherwise `base`.
    pub fn or(self, base: TriBool) -> TriBool {
        match self {
            TriBool::Unset => base,
            set => set,
        }
    }

    pub fn is_set(self) -> bool {
        self != TriBool::Unset
    }

    /// Collapses to a concrete boolean; unset counts as false.
    pub fn is_true(self) -> bool {
        self == TriBool::True
    }
}

impl From<bool> for TriBool {
    fn from(value: bool) -> Self {
        if value { TriBool::True } else { TriBool::False }
    }
}
