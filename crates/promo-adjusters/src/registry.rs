use crate::transform::RuleTransform;

/// Ordered collection of registered transforms.
///
/// Registration order is execution order. Transforms are wired in explicitly
/// at process start; there is no ambient registration.
pub struct TransformRegistry {
    transforms: Vec<Box<dyn RuleTransform>>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self { transforms: Vec::new() }
    }

    /// Append a transform; it runs after everything already registered.
    pub fn register(&mut self, transform: Box<dyn RuleTransform>) {
        self.transforms.push(transform);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Transforms in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn RuleTransform> {
        self.transforms.iter().map(|transform| transform.as_ref())
    }
}
