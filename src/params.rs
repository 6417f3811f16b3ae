//!
//! AssemblyParams
//!
use crate::common::DEFAULT_MAX_SEQ_LEN;
use crate::error::AssemblyError;
use serde::{Deserialize, Serialize};
use std::path::Path;

///
/// Parameters of the assembly
///
/// Missing fields in a json file are filled with the default values.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyParams {
    ///
    /// maximum number of build-shuffle-traverse attempts of the Eulerian trail search.
    /// `None` retries forever.
    pub max_attempts: Option<usize>,
    ///
    /// seed of the random edge order. `None` uses entropy.
    pub seed: Option<u64>,
    ///
    /// maximum length of the input sequence accepted by the validation
    pub max_seq_len: usize,
}

impl Default for AssemblyParams {
    fn default() -> Self {
        AssemblyParams {
            max_attempts: Some(1000),
            seed: None,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
        }
    }
}

impl AssemblyParams {
    pub fn new(max_attempts: Option<usize>, seed: Option<u64>) -> AssemblyParams {
        AssemblyParams {
            max_attempts,
            seed,
            ..Default::default()
        }
    }
    /// Load params from json file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<AssemblyParams, AssemblyError> {
        let text = std::fs::read_to_string(path)?;
        AssemblyParams::from_json(&text)
    }
    pub fn from_json(text: &str) -> Result<AssemblyParams, AssemblyError> {
        Ok(serde_json::from_str(text)?)
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("AssemblyParams is always serializable")
    }
}

impl std::fmt::Display for AssemblyParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let max_attempts = match self.max_attempts {
            Some(n) => n.to_string(),
            None => "unbounded".to_string(),
        };
        let seed = match self.seed {
            Some(n) => n.to_string(),
            None => "entropy".to_string(),
        };
        write!(
            f,
            "max_attempts={} seed={} max_seq_len={}",
            max_attempts, seed, self.max_seq_len
        )
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn params_default() {
        let p = AssemblyParams::default();
        assert_eq!(p.max_attempts, Some(1000));
        assert_eq!(p.seed, None);
        assert_eq!(p.max_seq_len, 1000);
        assert_eq!(
            p.to_string(),
            "max_attempts=1000 seed=entropy max_seq_len=1000"
        );
    }

    #[test]
    fn params_json_partial() {
        let p = AssemblyParams::from_json(r#"{"seed": 11}"#).unwrap();
        assert_eq!(p, AssemblyParams::new(Some(1000), Some(11)));
        let p = AssemblyParams::from_json(r#"{"max_attempts": null, "max_seq_len": 50}"#).unwrap();
        assert_eq!(p.max_attempts, None);
        assert_eq!(p.max_seq_len, 50);
    }

    #[test]
    fn params_json_file() {
        let p = AssemblyParams::new(Some(3), Some(5));
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", p.to_json()).unwrap();
        let q = AssemblyParams::from_json_file(file.path()).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn params_json_broken() {
        let r = AssemblyParams::from_json("{max_attempts: 1");
        assert!(matches!(r, Err(AssemblyError::Json(_))));
        let r = AssemblyParams::from_json_file("/nonexistent/dbgeuler/params.json");
        assert!(matches!(r, Err(AssemblyError::Io(_))));
    }
}
