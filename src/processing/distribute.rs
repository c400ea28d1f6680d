//! Balanced column distribution.
//!
//! Addresses are dealt one at a time round-robin so column sizes never differ
//! by more than one, whatever the group sizes. Each column is shuffled at the
//! end because the dealing order otherwise leaves a visible stripe.

use crate::models::{Column, PrefixGroup};
use rand::seq::SliceRandom;
use rand::Rng;

/// Deal the interleaved groups into `column_count` columns.
///
/// The cursor starts at a random column and advances after every single
/// address, not after every group. Returns no columns for `column_count == 0`.
pub fn distribute<R: Rng + ?Sized>(
    groups: Vec<PrefixGroup>,
    column_count: usize,
    rng: &mut R,
) -> Vec<Column> {
    if column_count == 0 {
        log::warn!("distribute() called with 0 columns, nothing to fill");
        return Vec::new();
    }

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); column_count];
    let mut col_index = rng.gen_range(0..column_count);
    log::debug!("distribute() start column {}", col_index + 1);

    for mut group in groups {
        group.ips.shuffle(rng);
        log::trace!("distribute() group {} ({} ips)", group.key, group.ips.len());
        for ip in group.ips {
            columns[col_index].push(ip);
            col_index = (col_index + 1) % column_count;
        }
    }

    columns
        .into_iter()
        .enumerate()
        .map(|(i, mut ips)| {
            ips.shuffle(rng);
            Column::new(i + 1, ips)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::group_by_prefix;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn groups(list: &[&str]) -> Vec<PrefixGroup> {
        let ips: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        group_by_prefix(&ips)
    }

    #[test]
    fn test_distribute_uneven_groups_stay_balanced() {
        // One big group and two singletons.
        let mut list: Vec<String> = (1..=9).map(|i| format!("10.0.0.{i}")).collect();
        list.push("172.16.0.1".to_string());
        list.push("192.168.0.1".to_string());
        let refs: Vec<&str> = list.iter().map(String::as_str).collect();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let columns = distribute(groups(&refs), 3, &mut rng);
            let sizes: Vec<usize> = columns.iter().map(|c| c.total_ips).collect();
            assert_eq!(sizes.iter().sum::<usize>(), 11);
            let max = *sizes.iter().max().expect("columns");
            let min = *sizes.iter().min().expect("columns");
            assert!(max - min <= 1, "seed {seed} unbalanced: {sizes:?}");
        }
    }

    #[test]
    fn test_distribute_ids_and_partition() {
        let mut rng = StdRng::seed_from_u64(3);
        let columns = distribute(
            groups(&["1.1.1.1", "1.1.1.2", "2.2.2.2", "3.3.3.3", "4.4.4.4"]),
            4,
            &mut rng,
        );
        assert_eq!(
            columns.iter().map(|c| c.id).collect::<Vec<usize>>(),
            vec![1, 2, 3, 4]
        );
        let mut seen = HashSet::new();
        for column in &columns {
            assert_eq!(column.total_ips, column.ips.len());
            for ip in &column.ips {
                assert!(seen.insert(ip.clone()), "{ip} placed twice");
            }
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_distribute_more_columns_than_ips() {
        let mut rng = StdRng::seed_from_u64(11);
        let columns = distribute(groups(&["8.8.8.8", "8.8.4.4"]), 5, &mut rng);
        assert_eq!(columns.len(), 5);
        assert_eq!(columns.iter().filter(|c| c.total_ips == 1).count(), 2);
        assert_eq!(columns.iter().filter(|c| c.is_empty()).count(), 3);
    }

    #[test]
    fn test_distribute_start_column_varies() {
        let mut homes = HashSet::new();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let columns = distribute(groups(&["8.8.8.8"]), 3, &mut rng);
            let home = columns
                .iter()
                .find(|c| !c.is_empty())
                .map(|c| c.id)
                .expect("address placed");
            homes.insert(home);
        }
        assert!(homes.len() > 1, "Always started in column {homes:?}");
    }

    #[test]
    fn test_distribute_shuffles_group_members() {
        // Without a group shuffle each column would only hold every other address.
        let list: Vec<String> = (0..30).map(|i| format!("10.0.0.{i}")).collect();
        let refs: Vec<&str> = list.iter().map(String::as_str).collect();
        let mixed_parity = (0..20).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let columns = distribute(groups(&refs), 2, &mut rng);
            let parities: HashSet<usize> = columns[0]
                .ips
                .iter()
                .map(|ip| list.iter().position(|l| l == ip).expect("known ip") % 2)
                .collect();
            parities.len() > 1
        });
        assert!(mixed_parity, "Group members were dealt in input order");
    }

    #[test]
    fn test_distribute_shuffles_each_column() {
        // Singleton groups keep their order through dealing; only the final
        // column shuffle can break the ascending order.
        let list: Vec<String> = (0..30).map(|i| format!("10.0.{i}.1")).collect();
        let refs: Vec<&str> = list.iter().map(String::as_str).collect();
        let reordered = (0..20).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let columns = distribute(groups(&refs), 2, &mut rng);
            columns.iter().any(|c| {
                let positions: Vec<usize> = c
                    .ips
                    .iter()
                    .map(|ip| list.iter().position(|l| l == ip).expect("known ip"))
                    .collect();
                positions.windows(2).any(|w| w[0] > w[1])
            })
        });
        assert!(reordered, "Columns kept their dealing order");
    }

    #[test]
    fn test_distribute_zero_columns() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(distribute(groups(&["1.1.1.1"]), 0, &mut rng).is_empty());
    }

    #[test]
    fn test_distribute_single_column() {
        let mut rng = StdRng::seed_from_u64(5);
        let columns = distribute(groups(&["1.1.1.1", "1.1.1.2", "9.9.9.9"]), 1, &mut rng);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].total_ips, 3);
    }
}
