use repfam_coverage::family_length;

use crate::models::Feature;

///
/// Family struct, a group of features believed to derive from one repeat element.
///
/// `id` is the index of the family's record in the input. `length` is the
/// number of bases covered by the union of the members, so overlapping
/// members are only counted once.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Family {
    pub id: usize,
    pub members: Vec<Feature>,
    pub length: u64,
}

impl Family {
    pub fn new(id: usize, members: Vec<Feature>) -> Self {
        let length = family_length(&members);
        Family {
            id,
            members,
            length,
        }
    }

    ///
    /// Number of member features
    ///
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
