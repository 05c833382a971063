// Ordered list of participant names.

use crate::error::SessionError;

/// Players entered so far, in entry order. Names may repeat or be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Replace the name at `index`.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<(), SessionError> {
        let len = self.names.len();
        let slot = self
            .names
            .get_mut(index)
            .ok_or(SessionError::PlayerOutOfRange { index, len })?;
        *slot = name.into();
        Ok(())
    }

    /// Remove and return the name at `index`. Later players shift up.
    pub fn remove(&mut self, index: usize) -> Result<String, SessionError> {
        if index >= self.names.len() {
            return Err(SessionError::PlayerOutOfRange {
                index,
                len: self.names.len(),
            });
        }
        Ok(self.names.remove(index))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Roster {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
