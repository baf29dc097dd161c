/// Ordered set of CSS class names.
///
/// Insertion order is preserved so serialized output is stable; adding a
/// class that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from a whitespace-separated string.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.extend_str(classes);
        list
    }

    /// Add a class. A name containing whitespace adds each of its tokens;
    /// blank names and duplicates are ignored.
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        for token in name.split_whitespace() {
            if !self.contains(token) {
                self.names.push(token.to_string());
            }
        }
    }

    /// Add the class when `on` is true, remove it otherwise.
    pub fn toggle(&mut self, name: &str, on: bool) {
        if on {
            self.add(name);
        } else {
            self.remove(name);
        }
    }

    /// Remove a class, or each token of a whitespace-separated name.
    pub fn remove(&mut self, name: &str) {
        let tokens: Vec<&str> = name.split_whitespace().collect();
        self.names.retain(|n| !tokens.contains(&n.as_str()));
    }

    /// Add every class in a whitespace-separated string.
    pub fn extend_str(&mut self, classes: &str) {
        self.add(classes);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.names.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.add(name);
        }
        list
    }
}
