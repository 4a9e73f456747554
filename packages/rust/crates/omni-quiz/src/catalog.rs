//! Named, name-ordered profile collections.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::matcher::{Match, Matcher};
use crate::record::{Profile, RawScores};

/// A named set of reference profiles, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    name: String,
    profiles: BTreeSet<Profile>,
}

impl Catalog {
    /// Build a catalog. A repeated name keeps its first profile.
    pub fn new(name: impl Into<String>, profiles: impl IntoIterator<Item = Profile>) -> Self {
        let name = name.into();
        let mut set = BTreeSet::new();
        for profile in profiles {
            let profile_name = profile.name().to_string();
            if !set.insert(profile) {
                log::debug!("catalog {name}: duplicate profile {profile_name:?} ignored");
            }
        }
        Self {
            name,
            profiles: set,
        }
    }

    /// Catalog name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Profiles in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    /// Number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog has no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Best match for `query` in this catalog.
    ///
    /// # Errors
    ///
    /// Propagates [`Matcher::best_match`] errors.
    pub fn best_match(&self, matcher: &Matcher, query: &RawScores) -> Result<Match<'_>> {
        matcher.best_match(query, self.iter())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Profile;
    type IntoIter = std::collections::btree_set::Iter<'a, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
