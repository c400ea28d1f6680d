//! Class interleaving of prefix groups.

use super::grouper::ClassBuckets;
use crate::models::{AddressClass, PrefixGroup};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle each class bucket, then merge them round by round.
///
/// Round `r` appends the `r`-th group of A, B, C and Other in that order,
/// skipping buckets that are already exhausted. Once the small buckets run
/// out the tail is made of whatever class is largest.
pub fn interleave<R: Rng + ?Sized>(mut buckets: ClassBuckets, rng: &mut R) -> Vec<PrefixGroup> {
    for class in AddressClass::ALL {
        buckets.get_mut(class).shuffle(rng);
    }

    let rounds = buckets.max_len();
    let mut interleaved = Vec::with_capacity(buckets.group_count());
    // Buckets are stored in AddressClass::ALL order.
    let mut bucket_iters = buckets.into_inner().map(Vec::into_iter);
    for _ in 0..rounds {
        for groups in bucket_iters.iter_mut() {
            if let Some(group) = groups.next() {
                interleaved.push(group);
            }
        }
    }

    log::debug!(
        "interleave() {} rounds -> {} groups",
        rounds,
        interleaved.len()
    );
    interleaved
}
