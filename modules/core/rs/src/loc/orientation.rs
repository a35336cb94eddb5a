use std::fmt::Display;

/// Orientation of a read relative to the reference it was aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum Orientation {
    /// The read was aligned as given.
    #[default]
    Forward = 1,
    /// The reverse complement of the read was aligned.
    Reverse = -1,
}

impl Orientation {
    /// Get the symbolic representation of the orientation.
    pub fn symbol(&self) -> char {
        match self {
            Orientation::Forward => 'F',
            Orientation::Reverse => 'R',
        }
    }

    /// Suffix appended to a read identifier to record its orientation, e.g. `read/F`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Orientation::Forward => "/F",
            Orientation::Reverse => "/R",
        }
    }

    /// Tag the read identifier with the orientation suffix.
    pub fn tag(&self, id: &str) -> String {
        let suffix = self.suffix();
        let mut tagged = String::with_capacity(id.len() + suffix.len());
        tagged.push_str(id);
        tagged.push_str(suffix);
        tagged
    }

    /// Recover the orientation from a tagged read identifier, if any.
    pub fn from_tagged(id: &str) -> Option<Self> {
        let (_, tag) = id.rsplit_once('/')?;
        let mut symbols = tag.chars();
        match (symbols.next(), symbols.next()) {
            (Some(symbol), None) => Orientation::try_from(symbol).ok(),
            _ => None,
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Orientation {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'F' => Ok(Orientation::Forward),
            'R' => Ok(Orientation::Reverse),
            _ => Err(()),
        }
    }
}
