/// Exact-word membership store.
///
/// Implementations are character-exact; callers fold case before `add` and
/// `contains`.
pub trait Index: Default {
    fn add(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;
    /// Number of distinct words stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn add_all<'a, I>(&mut self, items: I)
        where I: IntoIterator<Item = &'a str> {
        items.into_iter().for_each(|x| self.add(x));
    }
}
