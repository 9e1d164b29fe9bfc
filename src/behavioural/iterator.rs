// Iterator: a cursor over an aggregate's backing sequence.

use crate::console::Transcript;
use crate::error::PatternError;

#[derive(Debug, Clone, Default)]
pub struct ListAggregate<T> {
    items: Vec<T>,
}

impl<T> ListAggregate<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iterator(&self) -> ListIterator<'_, T> {
        ListIterator {
            collection: &self.items,
            index: 0,
        }
    }
}

/// Stateful position over a borrowed sequence.
#[derive(Debug)]
pub struct ListIterator<'a, T> {
    collection: &'a [T],
    index: usize,
}

impl<'a, T> ListIterator<'a, T> {
    pub fn has_next(&self) -> bool {
        self.index < self.collection.len()
    }

    /// Takes the next item, or fails once the sequence is consumed.
    pub fn try_next(&mut self) -> Result<&'a T, PatternError> {
        let item = self
            .collection
            .get(self.index)
            .ok_or(PatternError::Exhausted)?;
        self.index += 1;
        Ok(item)
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.collection.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T> IntoIterator for &'a ListAggregate<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterator()
    }
}

pub fn demo(out: &mut Transcript) {
    let mut list = ListAggregate::new();
    list.add_item("Item 1");
    list.add_item("Item 2");
    list.add_item("Item 3");

    let mut cursor = list.iterator();
    while cursor.has_next() {
        match cursor.try_next() {
            Ok(item) => out.say(*item),
            Err(err) => out.error(err.to_string()),
        }
    }

    if let Err(err) = cursor.try_next() {
        out.error(err.to_string());
    }
}
