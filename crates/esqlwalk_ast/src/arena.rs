//! Arena allocator for AST nodes.
//!
//! Uses `bumpalo` for bump allocation. Every node of a query is allocated in
//! the same arena and freed together when the arena is dropped.

use bumpalo::Bump;

/// Arena allocator for ES|QL AST nodes.
///
/// Nodes hold plain references into the arena, so a whole tree is `Copy`
/// and can be handed to any number of walkers without cloning.
///
/// # Example
///
/// ```rust
/// use esqlwalk_ast::{AstArena, Column};
///
/// let arena = AstArena::new();
///
/// let column = arena.alloc(Column::new("cpu"));
/// assert_eq!(column.name, "cpu");
///
/// let name = arena.alloc_str("host.name");
/// assert_eq!(name, "host.name");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstItem, Column, Function, SingleAstItem};

    #[test]
    fn test_arena_alloc_node() {
        let arena = AstArena::new();
        let column = arena.alloc(Column::new("bytes"));
        assert_eq!(column.name, "bytes");
        assert_eq!(column.text, "bytes");
    }

    #[test]
    fn test_arena_alloc_str() {
        let arena = AstArena::new();
        let s = arena.alloc_str("logs-*");
        assert_eq!(s, "logs-*");
    }

    #[test]
    fn test_arena_alloc_args_slice() {
        let arena = AstArena::new();
        let a = arena.alloc(Column::new("a"));
        let b = arena.alloc(Column::new("b"));
        let args: &[AstItem<'_>] = arena.alloc_slice_copy(&[a.into(), b.into()]);
        let function = Function::new("concat", args);

        assert_eq!(function.args.len(), 2);
        assert!(matches!(
            function.args[1],
            AstItem::Single(SingleAstItem::Column(column)) if column.name == "b"
        ));
    }

    #[test]
    fn test_arena_with_capacity_tracks_bytes() {
        let arena = AstArena::with_capacity(1024);
        let _ = arena.alloc(Column::new("host"));
        assert!(arena.allocated_bytes() > 0);
    }
}
