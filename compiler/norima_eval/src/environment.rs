//! Environment for variable and function bindings.
//!
//! Frames live in an arena (a `Vec<Frame>`) and refer to their parent by
//! `EnvId` handle. Calls are strictly nested, so the arena is used as a
//! stack: one root frame per run, one frame pushed per call and popped when
//! the call returns. No frame outlives its call and there are no cycles.

use rustc_hash::FxHashMap;

use norima_ir::FnDef;

use crate::Value;

/// Handle to a frame in an `Environment`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnvId(u32);

impl EnvId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single binding table.
#[derive(Debug)]
struct Frame<'a> {
    /// Variable bindings (`FxHashMap` for faster hashing of short names).
    vars: FxHashMap<String, Value>,
    /// Function definitions, borrowed from the program being evaluated.
    funcs: FxHashMap<String, &'a FnDef>,
    parent: Option<EnvId>,
}

impl<'a> Frame<'a> {
    fn new(parent: Option<EnvId>) -> Self {
        Frame {
            vars: FxHashMap::default(),
            funcs: FxHashMap::default(),
            parent,
        }
    }
}

/// Chained binding tables for one program run.
#[derive(Debug)]
pub struct Environment<'a> {
    frames: Vec<Frame<'a>>,
}

impl<'a> Environment<'a> {
    /// Create an environment holding only the root frame.
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::new(None)],
        }
    }

    /// The root frame. Always present.
    #[inline]
    pub fn root(&self) -> EnvId {
        EnvId(0)
    }

    /// Number of live frames, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push a new frame whose lookups fall back to `parent`.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` frames.
    pub fn push_frame(&mut self, parent: EnvId) -> EnvId {
        debug_assert!(parent.index() < self.frames.len(), "parent frame is not live");
        let id = u32::try_from(self.frames.len())
            .unwrap_or_else(|_| panic!("environment exceeded {} frames", u32::MAX));
        self.frames.push(Frame::new(Some(parent)));
        EnvId(id)
    }

    /// Pop the frame `id`, which must be the most recently pushed one.
    /// The root frame is never popped.
    pub fn pop_frame(&mut self, id: EnvId) {
        debug_assert_eq!(
            id.index() + 1,
            self.frames.len(),
            "frames must be popped in LIFO order"
        );
        if self.frames.len() > 1 {
            self.frames.truncate(id.index());
        }
    }

    /// Look up a variable, walking parent handles from `env`.
    pub fn get(&self, env: EnvId, name: &str) -> Option<&Value> {
        let mut current = Some(env);
        while let Some(id) = current {
            let frame = &self.frames[id.index()];
            if let Some(value) = frame.vars.get(name) {
                return Some(value);
            }
            current = frame.parent;
        }
        None
    }

    /// Create or overwrite a binding in `env` itself. Ancestor bindings of
    /// the same name are shadowed, never modified.
    pub fn set(&mut self, env: EnvId, name: impl Into<String>, value: Value) {
        self.frames[env.index()].vars.insert(name.into(), value);
    }

    /// Register a function in `env`, replacing any previous definition of
    /// the same name in that frame.
    pub fn define_fn(&mut self, env: EnvId, def: &'a FnDef) {
        self.frames[env.index()].funcs.insert(def.name.clone(), def);
    }

    /// Look up a function, walking parent handles from `env`.
    ///
    /// Also returns the frame the definition was found in, which lexical
    /// scoping uses as the parent of the call frame.
    pub fn get_fn(&self, env: EnvId, name: &str) -> Option<(&'a FnDef, EnvId)> {
        let mut current = Some(env);
        while let Some(id) = current {
            let frame = &self.frames[id.index()];
            if let Some(def) = frame.funcs.get(name) {
                return Some((*def, id));
            }
            current = frame.parent;
        }
        None
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str) -> FnDef {
        FnDef {
            name: name.to_string(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut env = Environment::new();
        let root = env.root();
        env.set(root, "x", Value::Number(42.0));
        assert_eq!(env.get(root, "x"), Some(&Value::Number(42.0)));
        assert_eq!(env.get(root, "y"), None);
    }

    #[test]
    fn test_set_overwrites_locally() {
        let mut env = Environment::new();
        let root = env.root();
        env.set(root, "x", Value::Number(1.0));
        env.set(root, "x", Value::Number(2.0));
        assert_eq!(env.get(root, "x"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn test_child_shadows_without_touching_parent() {
        let mut env = Environment::new();
        let root = env.root();
        env.set(root, "x", Value::Number(1.0));

        let child = env.push_frame(root);
        assert_eq!(env.get(child, "x"), Some(&Value::Number(1.0)));

        env.set(child, "x", Value::Number(2.0));
        assert_eq!(env.get(child, "x"), Some(&Value::Number(2.0)));
        assert_eq!(env.get(root, "x"), Some(&Value::Number(1.0)));

        env.pop_frame(child);
        assert_eq!(env.depth(), 1);
        assert_eq!(env.get(root, "x"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn test_functions_resolve_through_parents() {
        let f = def("f");
        let mut env = Environment::new();
        let root = env.root();
        env.define_fn(root, &f);

        let child = env.push_frame(root);
        let grandchild = env.push_frame(child);
        let Some((found, owner)) = env.get_fn(grandchild, "f") else {
            panic!("function should resolve through the parent chain");
        };
        assert_eq!(found.name, "f");
        assert_eq!(owner, root);
        assert!(env.get_fn(grandchild, "g").is_none());
    }

    #[test]
    fn test_redefinition_replaces() {
        let first = FnDef {
            params: vec!["a".into()],
            ..def("f")
        };
        let second = def("f");
        let mut env = Environment::new();
        let root = env.root();
        env.define_fn(root, &first);
        env.define_fn(root, &second);
        assert!(env
            .get_fn(root, "f")
            .is_some_and(|(d, _)| d.params.is_empty()));
    }

    #[test]
    fn test_root_is_never_popped() {
        let mut env = Environment::new();
        let root = env.root();
        let child = env.push_frame(root);
        env.pop_frame(child);
        assert_eq!(env.depth(), 1);
    }
}
