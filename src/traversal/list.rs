//! A singly linked list of owned boxes. Owned links can't loop back on
//! themselves, so walking one always terminates.

/// A node in a singly linked list.
#[derive(Debug, PartialEq)]
pub struct ListNode<T> {
    pub value: T,
    pub next: Option<Box<ListNode<T>>>,
}

impl<T> ListNode<T> {
    pub fn new(value: T, next: Option<ListNode<T>>) -> Self {
        Self {
            value,
            next: next.map(Box::new),
        }
    }

    /// Builds a list holding `values` in order, returning its head.
    pub fn from_values<I>(values: I) -> Option<Box<ListNode<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let mut head = None;

        for value in values.into_iter().rev() {
            head = Some(Box::new(ListNode { value, next: head }));
        }

        head
    }

    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter { next: Some(self) }
    }
}

impl<T> Drop for ListNode<T> {
    // unlink one node at a time; the default drop recurses once per node and
    // a long enough list will blow the stack
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

pub struct ListIter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

/// Values from head to the end of the list.
pub fn traverse_linked_list<T: Clone>(head: Option<&ListNode<T>>) -> Vec<T> {
    let mut out = Vec::new();
    let mut curr = head;

    while let Some(node) = curr {
        out.push(node.value.clone());
        curr = node.next.as_deref();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{traverse_linked_list, ListNode};

    #[test]
    fn test_traversal() {
        // 1 -> 2 -> 3
        let head = ListNode::new(1, Some(ListNode::new(2, Some(ListNode::new(3, None)))));

        assert_eq!(vec![1, 2, 3], traverse_linked_list(Some(&head)));
        assert_eq!(vec![&1, &2, &3], head.iter().collect::<Vec<_>>());
    }

    #[test]
    fn from_values_keeps_order() {
        let head = ListNode::from_values(vec!["a", "b", "c"]);

        assert_eq!(vec!["a", "b", "c"], traverse_linked_list(head.as_deref()));
        assert_eq!(
            Some(ListNode::new("a", Some(ListNode::new("b", Some(ListNode::new("c", None)))))),
            head.map(|node| *node)
        );
    }

    #[test]
    fn empty_list() {
        let head = ListNode::<u8>::from_values(Vec::new());

        assert!(head.is_none());
        assert!(traverse_linked_list(head.as_deref()).is_empty());
    }

    #[test]
    fn long_list_drops_without_recursing() {
        let head = ListNode::from_values(0..200_000u32);

        assert_eq!(200_000, head.as_ref().map_or(0, |node| node.iter().count()));
        drop(head);
    }
}
