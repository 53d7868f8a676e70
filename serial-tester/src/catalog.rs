// serial-tester-rs/serial-tester/src/catalog.rs

//! Name-keyed payload tables.
//!
//! Two catalogs drive a run: the commands sent to the test server and the
//! replies recorded as correct for them. Both map a test name to a hex
//! digit-pair string. They are kept in sync by hand; nothing rejects a
//! command without an expectation.

use std::collections::HashMap;

/// Commands run against the test server, keyed by test name.
pub const BUILTIN_COMMANDS: &[(&str, &str)] = &[
    ("GPIO_SET_PUD", "00080006000400120002"),
    ("GPIO_SET_DIR", "00080006000400120102"),
    ("GPIO_SET_LVL", "00080006000400120200"),
    ("GPIO_READ_PUD", "000700050103001200"),
    ("GPIO_READ_DIR", "000700050103001201"),
    ("GPIO_READ_LVL", "000700050103001202"),
    ("MDIO_READ_8221_REG", "00090107000500640A0000"),
    ("MDIO_READ_8489_REG_1", "000901070105000F7A0000"),
    ("MDIO_READ_8489_REG_2", "000901070105003F7A0000"),
    ("I2C_WRITE", "00080206010400A26EFF"),
    ("I2C_READ", "00070205000300A000"),
];

/// Placeholder replies, padding already stripped, lowercase hex.
///
/// These are not captured server output. Replace each entry with the reply
/// the test server actually returns for the command before trusting a PASS.
pub const BUILTIN_EXPECTED: &[(&str, &str)] = &[
    ("GPIO_SET_PUD", "0600040004001201"),
    ("GPIO_SET_DIR", "0600040004001201"),
    ("GPIO_SET_LVL", "0600040004001201"),
    ("GPIO_READ_PUD", "0600040103001202"),
    ("GPIO_READ_DIR", "0600040103001201"),
    ("GPIO_READ_LVL", "0600040103001201"),
    ("MDIO_READ_8221_REG", "070105000500640a1140"),
    ("MDIO_READ_8489_REG_1", "0701050105000f7a7949"),
    ("MDIO_READ_8489_REG_2", "0701050105003f7a0c01"),
    ("I2C_WRITE", "060204010400a201"),
    ("I2C_READ", "060204000300a06e"),
];

/// Immutable mapping from test name to hex payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog from `(name, hex)` pairs. A repeated name keeps the
    /// last payload given for it.
    pub fn from_pairs<I, N, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(n, p)| (n.into(), p.into()))
                .collect(),
        }
    }

    /// Catalog of [`BUILTIN_COMMANDS`].
    pub fn builtin_commands() -> Self {
        Self::from_pairs(BUILTIN_COMMANDS.iter().copied())
    }

    /// Catalog of [`BUILTIN_EXPECTED`].
    pub fn builtin_expected() -> Self {
        Self::from_pairs(BUILTIN_EXPECTED.iter().copied())
    }

    /// Payload recorded for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in ascending byte-wise order. This is the run order: command
    /// families sharing a prefix end up adjacent and numbered variants run in
    /// sequence.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `(name, payload)` pairs in [`sorted_names`](Self::sorted_names) order.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(n, p)| (n.as_str(), p.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Names present here but absent from `other`, in sorted order.
    pub fn missing_from(&self, other: &Catalog) -> Vec<&str> {
        self.sorted_names()
            .into_iter()
            .filter(|name| other.get(name).is_none())
            .collect()
    }
}
