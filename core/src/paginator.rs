use std::fmt;
use std::ops::Deref;

/// A contiguous slice of the paginated items.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<T> Deref for Page<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}

/// Items are written back to back with no separator.
impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Paginator<'a, T> {
    pages: Vec<Page<'a, T>>,
}

impl<'a, T> Paginator<'a, T> {
    /// Split `items` into pages of `page_size`; the last page may be shorter.
    /// A zero page size gives one empty page.
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        let pages = if page_size == 0 {
            vec![Page { items: &items[items.len()..] }]
        } else {
            items.chunks(page_size).map(|items| Page { items }).collect()
        };
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page<'a, T>> {
        self.pages.iter()
    }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = std::vec::IntoIter<Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

impl<'p, 'a, T> IntoIterator for &'p Paginator<'a, T> {
    type Item = &'p Page<'a, T>;
    type IntoIter = std::slice::Iter<'p, Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}
