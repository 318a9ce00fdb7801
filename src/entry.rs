/// A key-value pair stored in a tree node.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> Entry<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Entry { key, value }
    }

    pub fn into_pair(self) -> (T, U) {
        (self.key, self.value)
    }

    pub fn as_pair(&self) -> (&T, &U) {
        (&self.key, &self.value)
    }
}
