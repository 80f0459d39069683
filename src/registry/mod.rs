// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Equivalence classes of arrays sharing a signature.
//!
//! Arrays are registered in enumeration order and receive consecutive
//! 1-based indices. A class is created the first time its signature is seen
//! and only ever grows afterwards; members stay in registration order.
//!
//! # Examples
//!
//! ```
//! use distinct_arrays::array::ArrayParams;
//! use distinct_arrays::enumerator::Enumerator;
//! use distinct_arrays::registry::EquivalenceRegistry;
//!
//! let mut registry = EquivalenceRegistry::new();
//! for (_, array) in Enumerator::new(ArrayParams::new(4, 3).unwrap()) {
//!     registry.register(&array);
//! }
//! assert_eq!(registry.total_arrays(), 6);
//! assert_eq!(registry.total_classes(), 4);
//! assert_eq!(registry.class_of(4).unwrap().members(), &[2, 4, 5]);
//! ```

use crate::array::{NormalizedArray, Signature};
use std::collections::HashMap;
use tracing::debug;

/// All registered arrays sharing one signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClass {
    signature: Signature,
    members: Vec<usize>,
}

impl EquivalenceClass {
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Member indices in registration order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Index of the member that created the class.
    pub fn representative(&self) -> usize {
        self.members[0]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a class is created with its first member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Outcome of registering one array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// 1-based index assigned to the array.
    pub index: usize,
    pub signature: Signature,
    /// Whether the array opened a new class.
    pub new_class: bool,
}

/// Map from signature to equivalence class for one enumeration run.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceRegistry {
    /// Classes in discovery order.
    classes: Vec<EquivalenceClass>,
    /// Position of each signature's class in `classes`.
    by_signature: HashMap<Signature, usize>,
    /// Signature of each registered array, by index - 1.
    signatures: Vec<Signature>,
}

impl EquivalenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next array in enumeration order.
    pub fn register(&mut self, array: &NormalizedArray) -> Registration {
        self.register_signature(array.signature())
    }

    /// Register the next array by its already computed signature.
    pub fn register_signature(&mut self, signature: Signature) -> Registration {
        self.signatures.push(signature);
        let index = self.signatures.len();

        let new_class = match self.by_signature.get(&signature) {
            Some(&class) => {
                self.classes[class].members.push(index);
                false
            }
            None => {
                self.by_signature.insert(signature, self.classes.len());
                self.classes.push(EquivalenceClass {
                    signature,
                    members: vec![index],
                });
                debug!(
                    index,
                    %signature,
                    classes = self.classes.len(),
                    "new equivalence class"
                );
                true
            }
        };

        Registration {
            index,
            signature,
            new_class,
        }
    }

    /// Number of arrays registered.
    pub fn total_arrays(&self) -> usize {
        self.signatures.len()
    }

    /// Number of distinct signatures.
    pub fn total_classes(&self) -> usize {
        self.classes.len()
    }

    /// Signature of the array with the given 1-based index.
    pub fn signature_of(&self, index: usize) -> Option<Signature> {
        index
            .checked_sub(1)
            .and_then(|offset| self.signatures.get(offset))
            .copied()
    }

    /// The class with the given signature, if any array had it.
    pub fn class_by_signature(&self, signature: Signature) -> Option<&EquivalenceClass> {
        self.by_signature
            .get(&signature)
            .map(|&class| &self.classes[class])
    }

    /// The class containing the array with the given 1-based index.
    pub fn class_of(&self, index: usize) -> Option<&EquivalenceClass> {
        self.signature_of(index)
            .and_then(|signature| self.class_by_signature(signature))
    }

    /// All classes in discovery order.
    pub fn classes(&self) -> impl ExactSizeIterator<Item = &EquivalenceClass> {
        self.classes.iter()
    }
}
