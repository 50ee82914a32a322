use super::Observation;

/// A sequence of observations of the same object.
///
/// Observations are kept in insertion order; nothing requires them to be sorted
/// by time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationArc {
    desig: String,
    obs: Vec<Observation>,
}

impl ObservationArc {
    pub fn new(desig: impl Into<String>) -> Self {
        ObservationArc {
            desig: desig.into(),
            obs: Vec::new(),
        }
    }

    pub fn with_observations(desig: impl Into<String>, obs: Vec<Observation>) -> Self {
        ObservationArc {
            desig: desig.into(),
            obs,
        }
    }

    pub fn desig(&self) -> &str {
        &self.desig
    }

    pub fn push(&mut self, obs: impl Into<Observation>) {
        self.obs.push(obs.into());
    }

    pub fn observations(&self) -> &[Observation] {
        &self.obs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.obs.iter()
    }

    pub fn len(&self) -> usize {
        self.obs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obs.is_empty()
    }
}

impl Extend<Observation> for ObservationArc {
    fn extend<I: IntoIterator<Item = Observation>>(&mut self, iter: I) {
        self.obs.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ObservationArc {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.obs.iter()
    }
}
