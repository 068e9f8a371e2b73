//! Built-in VoltScript example programs
//!
//! The catalog is plain data: a name-to-source mapping that is built once at
//! startup and handed to whoever needs it. Nothing in here has side effects.

use std::collections::BTreeMap;

/// Name of the example loaded when the application starts
pub const DEFAULT_EXAMPLE: &str = "hello";

pub const HELLO: &str = r#"int x = 10;
int y = 20;
int sum = x + y;

print(sum);
print("Hello from VoltScript!");"#;

pub const LOOP: &str = r#"int i = 0;

while(i < 5) {
    print(i);
    i = i + 1;
}

for(int j = 0; j < 3; j = j + 1) {
    print(j);
}"#;

pub const CONDITIONAL: &str = r#"int age = 18;

if(age >= 18) {
    print("Adult");
} else {
    print("Minor");
}

int score = 85;

if(score >= 90) {
    print("A grade");
} else {
    if(score >= 80) {
        print("B grade");
    } else {
        print("C grade");
    }
}"#;

/// Immutable mapping from example name to source text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleCatalog {
    entries: BTreeMap<String, String>,
}

impl ExampleCatalog {
    /// The examples shipped with the playground
    pub fn builtin() -> Self {
        Self::from_entries([("hello", HELLO), ("loop", LOOP), ("conditional", CONDITIONAL)])
    }

    /// Build a catalog from arbitrary `(name, body)` pairs.
    ///
    /// Later duplicates replace earlier ones.
    pub fn from_entries<I, N, B>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, B)>,
        N: Into<String>,
        B: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, body)| (name.into(), body.into()))
                .collect(),
        }
    }

    /// Look up an example body by name
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Example names in alphabetical order (used for on-screen listing only)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Name at `index` in alphabetical order
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names().nth(index)
    }

    /// The name following `current` alphabetically, wrapping around.
    ///
    /// Returns the first name when `current` is unknown.
    pub fn next_after(&self, current: Option<&str>) -> Option<&str> {
        let first = self.names().next()?;
        let Some(current) = current else {
            return Some(first);
        };
        let mut names = self.names().skip_while(|name| *name != current);
        match names.next() {
            Some(_) => Some(names.next().unwrap_or(first)),
            None => Some(first),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
