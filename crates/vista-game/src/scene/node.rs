use std::any::Any;
use std::fmt;

use vista_engine::coords::Vec3;

pub struct SceneNode {
    pub name: String,
    pub position: Vec3,
    components: Vec<Box<dyn Any>>,
    children: Vec<SceneNode>,
}

impl fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneNode")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("components_len", &self.components.len())
            .field("children", &self.children)
            .finish()
    }
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::zero(),
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: attaches a component.
    pub fn with_component<T: Any>(mut self, component: T) -> Self {
        self.components.push(Box::new(component));
        self
    }

    /// Builder: appends a child.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// First component of type `T`.
    pub fn component<T: Any>(&self) -> Option<&T> {
        self.components.iter().find_map(|c| c.downcast_ref::<T>())
    }

    pub fn component_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.components.iter_mut().find_map(|c| c.downcast_mut::<T>())
    }

    pub fn has_component<T: Any>(&self) -> bool {
        self.component::<T>().is_some()
    }
}

/// Descendant of `node` reached by `path`.
///
/// A plain name matches a direct child; `"props/lamp"` walks one level per
/// `/`-separated segment. Empty segments never match.
pub fn child_by_name<'a>(node: &'a SceneNode, path: &str) -> Option<&'a SceneNode> {
    path.split('/').try_fold(node, |current, segment| {
        if segment.is_empty() {
            return None;
        }
        current.children.iter().find(|c| c.name == segment)
    })
}

/// First direct child of `node` carrying a `T` component.
pub fn child_with<T: Any>(node: &SceneNode) -> Option<&SceneNode> {
    node.children.iter().find(|c| c.has_component::<T>())
}
