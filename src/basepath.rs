//! # Basepath Resolution
//!
//! When several banks are loaded together, every generated txtp should land
//! under one common root: the root path of the first bank asked about. With
//! per-language output each bank tree may live in its own directory, so the
//! cache is bypassed and every query answers from the queried bank.

use log::debug;

/// A node in a loaded bank tree.
pub trait BankNode {
    /// Root node of the tree this node belongs to. A root returns itself.
    fn root(&self) -> &dyn BankNode;
    /// Directory path of this node.
    fn path(&self) -> &str;
}

/// Normalises a directory-ish path: trims whitespace, converts backslashes
/// and guarantees a trailing `/` unless the result is empty.
///
/// ```
/// use wtxtp::basepath::normalize_path;
///
/// assert_eq!(normalize_path(Some("a\\b")), "a/b/");
/// assert_eq!(normalize_path(Some(" out/ ")), "out/");
/// assert_eq!(normalize_path(None), "");
/// ```
#[must_use]
pub fn normalize_path(path: Option<&str>) -> String {
    let mut path = path.unwrap_or_default().trim().replace('\\', "/");
    if !path.is_empty() && !path.ends_with('/') {
        path.push('/');
    }
    path
}

#[derive(Debug, Default, Clone)]
pub struct BasepathResolver {
    common_base_path: Option<String>,
}

impl BasepathResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Basepath for outputs generated from `node`.
    ///
    /// Without `per_language` the first call caches that node's root path and
    /// every later call returns it, whatever node is passed.
    pub fn get_basepath(&mut self, node: &dyn BankNode, per_language: bool) -> String {
        if per_language {
            return node.root().path().to_string();
        }

        self.common_base_path
            .get_or_insert_with(|| {
                let path = node.root().path().to_string();
                debug!("Common basepath set to '{path}'");
                path
            })
            .clone()
    }

    /// Forces the cached basepath from the first bank, if any.
    pub fn set_basepath<B: BankNode>(&mut self, banks: &[B]) {
        let Some(first) = banks.first() else {
            return;
        };
        let path = first.root().path().to_string();
        debug!("Common basepath seeded with '{path}'");
        self.common_base_path = Some(path);
    }

    #[must_use]
    pub fn cached(&self) -> Option<&str> {
        self.common_base_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        path: String,
        root: Option<Box<Node>>,
    }

    impl Node {
        fn root_at(path: &str) -> Self {
            Self {
                path: path.to_string(),
                root: None,
            }
        }

        fn child_of(path: &str, root: &str) -> Self {
            Self {
                path: path.to_string(),
                root: Some(Box::new(Self::root_at(root))),
            }
        }
    }

    impl BankNode for Node {
        fn root(&self) -> &dyn BankNode {
            match &self.root {
                Some(root) => &**root,
                None => self,
            }
        }
        fn path(&self) -> &str {
            &self.path
        }
    }

    #[test]
    fn test_normalize_path_cases() {
        assert_eq!(normalize_path(Some("a\\b")), "a/b/");
        assert_eq!(normalize_path(Some("")), "");
        assert_eq!(normalize_path(None), "");
        assert_eq!(normalize_path(Some("   ")), "");
        assert_eq!(normalize_path(Some("txtp/")), "txtp/");
        assert_eq!(normalize_path(Some("  C:\\games\\sound ")), "C:/games/sound/");
    }

    #[test]
    fn test_normalize_path_idempotent() {
        for input in ["a\\b", "", " x ", "dir/", "a\\b\\", "/", "\\", " a b\\c"] {
            let once = normalize_path(Some(input));
            assert_eq!(normalize_path(Some(once.as_str())), once, "Not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_first_basepath_wins() {
        let mut resolver = BasepathResolver::new();
        let a = Node::child_of("bgm/", "sound/pc/");
        let b = Node::root_at("dlc/sound/");

        assert_eq!(resolver.get_basepath(&a, false), "sound/pc/");
        assert_eq!(resolver.get_basepath(&b, false), "sound/pc/");
    }

    #[test]
    fn test_per_language_does_not_cache() {
        let mut resolver = BasepathResolver::new();
        let a = Node::root_at("sound/en/");
        let b = Node::root_at("sound/ja/");

        assert_eq!(resolver.get_basepath(&a, true), "sound/en/");
        assert_eq!(resolver.get_basepath(&b, true), "sound/ja/");
        assert!(resolver.cached().is_none());
    }

    #[test]
    fn test_set_basepath_overrides_cache() {
        let mut resolver = BasepathResolver::new();
        let a = Node::root_at("a/");
        let b = Node::root_at("b/");
        let c = Node::root_at("c/");

        assert_eq!(resolver.get_basepath(&c, false), "c/");
        resolver.set_basepath(&[a, b]);
        assert_eq!(resolver.cached(), Some("a/"));
        assert_eq!(resolver.get_basepath(&c, false), "a/");
    }

    #[test]
    fn test_set_basepath_empty_is_noop() {
        let mut resolver = BasepathResolver::new();
        resolver.set_basepath::<Node>(&[]);
        assert!(resolver.cached().is_none());

        let c = Node::root_at("c/");
        resolver.get_basepath(&c, false);
        resolver.set_basepath::<Node>(&[]);
        assert_eq!(resolver.cached(), Some("c/"));
    }
}
