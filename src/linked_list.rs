//! A doubly linked list. Nodes are heap allocated and linked with raw pointers in both directions
//! but ownership only flows one way: the list owns the head, every node owns its `next` node and
//! the `previous` pointer is only ever followed, never freed.
//!
//! # Examples
//!
//! ```
//! use classic_ds::linked_list::{DoublyLinkedList, NotFound};
//!
//! let mut list = DoublyLinkedList::new();
//! for value in 1..=5 {
//!     list.add(value);
//! }
//!
//! // Removing returns the stored value.
//! assert_eq!(list.remove(1), Ok(1));
//! assert_eq!(list.to_vec(), [&2, &3, &4, &5]);
//!
//! // Removing something that isn't there hands the value back.
//! assert_eq!(list.remove(99), Err(NotFound(99)));
//! assert_eq!(list.to_vec(), [&2, &3, &4, &5]);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::{debug, trace};

/// An ordered sequence of values supporting appends at the tail and removal by value.
pub struct DoublyLinkedList<T> {
    // Owning. Freeing the head frees the rest of the list via `next`.
    head: Link<T>,
    // Non-owning. Always the last node reachable from `head`.
    tail: Link<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

/// Returned by [`DoublyLinkedList::remove`] when no element equals the given value. It holds the
/// value that was searched for.
#[derive(Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value not found in list")]
pub struct NotFound<T>(
    /// The value that was searched for.
    pub T,
);

impl<T> fmt::Debug for NotFound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotFound(..)")
    }
}

struct Link<T>(Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    fn none() -> Self {
        Self(None)
    }

    fn node(&self) -> Option<&Node<T>> {
        // SAFETY: A `Link` held by a list or one of its nodes either is `None` or points at a
        // live node owned by that list. Because we take `&self` here, the caller can't be holding
        // a mutable reference produced by `node_mut` on a copy of this link at the same time; it
        // would have to go through unsafe code to do so.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn node_mut(&mut self) -> Option<&mut Node<T>> {
        // SAFETY: See `node`. The list only hands out one of these at a time.
        unsafe { self.0.as_mut().map(|ptr| ptr.as_mut()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }
}

struct Node<T> {
    value: T,
    next: Link<T>,
    previous: Link<T>,
}

impl<T> Node<T> {
    fn new_leaked(value: T, previous: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node {
            value,
            next: Link::none(),
            previous,
        })))
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.tail = Link::none();
        let mut cursor = self.head.take();
        while let Some(ptr) = cursor.0 {
            // SAFETY: Every node was allocated with `Box::new` in `Node::new_leaked` and is owned
            // by exactly one `next` link (or `head`). We walk those links front to back, freeing
            // each node after reading its `next`, so no node is freed twice or read after being
            // freed.
            let node = unsafe { Box::from_raw(ptr.as_ptr()) };
            cursor = node.next;
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Generate a new, empty list.
    pub fn new() -> Self {
        Self {
            head: Link::none(),
            tail: Link::none(),
            len: 0,
            marker: PhantomData,
        }
    }

    /// How many values are in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value at the head of the list.
    pub fn first(&self) -> Option<&T> {
        self.head.node().map(|n| &n.value)
    }

    /// The value at the tail of the list.
    pub fn last(&self) -> Option<&T> {
        self.tail.node().map(|n| &n.value)
    }

    /// Appends `value` after the current tail in constant time.
    pub fn add(&mut self, value: T) {
        let node = Node::new_leaked(value, self.tail);
        match self.tail.node_mut() {
            Some(tail) => tail.next = Link(Some(node)),
            None => self.head = Link(Some(node)),
        }
        self.tail = Link(Some(node));
        self.len += 1;
    }

    /// Removes the first element, searching from the head, that equals `value` and returns it.
    /// If no element matches, the list is left untouched and `value` is handed back inside
    /// [`NotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::linked_list::{DoublyLinkedList, NotFound};
    ///
    /// let mut list: DoublyLinkedList<_> = vec![1, 2, 1].into_iter().collect();
    ///
    /// // Only the first match goes.
    /// assert_eq!(list.remove(1), Ok(1));
    /// assert_eq!(list.to_vec(), [&2, &1]);
    ///
    /// let mut empty = DoublyLinkedList::<i32>::new();
    /// assert_eq!(empty.remove(1), Err(NotFound(1)));
    /// ```
    pub fn remove(&mut self, value: T) -> Result<T, NotFound<T>>
    where
        T: PartialEq,
    {
        let mut cursor = self.head;
        while let Some(ptr) = cursor.0 {
            // SAFETY: `cursor` came from `head` or a `next` link of a live node of this list and
            // nothing has been unlinked yet.
            let node = unsafe { ptr.as_ref() };
            if node.value == value {
                // SAFETY: `ptr` is a node of this list and `node` isn't used after this.
                let removed = unsafe { self.unlink(ptr) };
                trace!("Removed an element, {} left", self.len);
                return Ok(removed);
            }
            cursor = node.next;
        }

        debug!("Value not found among {} elements", self.len);
        Err(NotFound(value))
    }

    /// Collects references to every value from head to tail.
    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Iterates from head to tail. Calling `rev` walks the `previous` links from tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.head,
            back: self.tail,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// Detaches the node at `ptr` from its neighbours, frees it and returns its value.
    ///
    /// # Safety
    ///
    /// `ptr` must point at a node of this list and no reference to that node may be used after
    /// this call.
    unsafe fn unlink(&mut self, ptr: NonNull<Node<T>>) -> T {
        let node = *Box::from_raw(ptr.as_ptr());
        match (node.previous.0, node.next.0) {
            // The only element.
            (None, None) => {
                self.head = Link::none();
                self.tail = Link::none();
            }
            // The head. Its successor takes over and stops pointing back.
            (None, Some(mut next)) => {
                next.as_mut().previous = Link::none();
                self.head = Link(Some(next));
            }
            // The tail. Its predecessor takes over and stops pointing forward.
            (Some(mut previous), None) => {
                previous.as_mut().next = Link::none();
                self.tail = Link(Some(previous));
            }
            (Some(mut previous), Some(mut next)) => {
                previous.as_mut().next = Link(Some(next));
                next.as_mut().previous = Link(Some(previous));
            }
        }
        self.len -= 1;

        node.value
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over references to the values of a [`DoublyLinkedList`], created by
/// [`DoublyLinkedList::iter`].
pub struct Iter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    /// Stops `front` and `back` from walking past each other.
    remaining: usize,
    marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.front.0?;
        // SAFETY: The iterator borrows the list so no node can be freed or mutated while it
        // lives, and `remaining` keeps us on nodes that haven't been yielded from the back.
        let node = unsafe { ptr.as_ref() };
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.back.0?;
        // SAFETY: See `next`.
        let node = unsafe { ptr.as_ref() };
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
