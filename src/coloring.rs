//! Colour-class ordering: the greedy-colouring bound that drives the
//! branch-and-bound pruning in [`crate::search`].
//!
//! Given a candidate set `P`, each variant fills `p_order` (the vertices,
//! in the order branches will consume them — last-picked last) and
//! `p_bounds` (a non-decreasing colour-number upper bound on the clique
//! extendable from the prefix ending at each position). All three share
//! the same greedy sequential colouring; they differ only in how the
//! resulting classes are laid out into `p_order`/`p_bounds`.

use crate::bitgraph::BitGraph;
use crate::bitset::FixedBitSet;

/// Selects one of the three colour-class ordering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColoringVariant {
    /// Greedy sequential colouring, written out as colours are assigned.
    NoSorting,
    /// Like `NoSorting`, but colour classes of size 1 are deferred to the
    /// tail, each given its own fresh colour.
    Defer1,
    /// Greedy sequential colouring, but classes are stable-sorted by
    /// non-increasing size before being laid out.
    FullSort,
}

/// Colours `p` and writes the result into `p_order`/`p_bounds`.
///
/// Only the first `p.popcount()` entries of each output array are
/// meaningful; callers size their arrays at `FixedBitSet::<W>::CAPACITY`
/// and read back only that many entries.
///
/// Returns `k = p.popcount()`, the number of colours classes written.
pub fn colour_class_order<const W: usize>(
    variant: ColoringVariant,
    graph: &BitGraph<W>,
    p: &FixedBitSet<W>,
    p_order: &mut [usize],
    p_bounds: &mut [usize],
) -> usize {
    match variant {
        ColoringVariant::NoSorting => no_sorting(graph, p, p_order, p_bounds),
        ColoringVariant::Defer1 => defer1(graph, p, p_order, p_bounds),
        ColoringVariant::FullSort => full_sort(graph, p, p_order, p_bounds),
    }
}

fn no_sorting<const W: usize>(
    graph: &BitGraph<W>,
    p: &FixedBitSet<W>,
    p_order: &mut [usize],
    p_bounds: &mut [usize],
) -> usize {
    let mut p_left = *p;
    let mut colour = 0usize;
    let mut i = 0usize;

    while !p_left.is_empty() {
        colour += 1;
        let mut q = p_left;
        while !q.is_empty() {
            let v = q.first_set_bit();
            p_left.unset(v);
            q.unset(v);
            graph.intersect_with_row_complement(v, &mut q);

            p_order[i] = v;
            p_bounds[i] = colour;
            i += 1;
        }
    }
    i
}

fn defer1<const W: usize>(
    graph: &BitGraph<W>,
    p: &FixedBitSet<W>,
    p_order: &mut [usize],
    p_bounds: &mut [usize],
) -> usize {
    let mut p_left = *p;
    let mut colour = 0usize;
    let mut i = 0usize;
    let mut deferred: Vec<usize> = Vec::new();

    while !p_left.is_empty() {
        colour += 1;
        let mut q = p_left;
        let mut count_this_colour = 0usize;

        while !q.is_empty() {
            let v = q.first_set_bit();
            p_left.unset(v);
            q.unset(v);
            graph.intersect_with_row_complement(v, &mut q);

            p_order[i] = v;
            p_bounds[i] = colour;
            i += 1;
            count_this_colour += 1;
        }

        if count_this_colour == 1 {
            i -= 1;
            colour -= 1;
            deferred.push(p_order[i]);
        }
    }

    for v in deferred {
        colour += 1;
        p_order[i] = v;
        p_bounds[i] = colour;
        i += 1;
    }
    i
}

fn full_sort<const W: usize>(
    graph: &BitGraph<W>,
    p: &FixedBitSet<W>,
    p_order: &mut [usize],
    p_bounds: &mut [usize],
) -> usize {
    let mut p_left = *p;
    let mut colour_classes: Vec<Vec<usize>> = Vec::new();

    while !p_left.is_empty() {
        let mut class = Vec::new();
        let mut q = p_left;
        while !q.is_empty() {
            let v = q.first_set_bit();
            p_left.unset(v);
            q.unset(v);
            graph.intersect_with_row_complement(v, &mut q);
            class.push(v);
        }
        colour_classes.push(class);
    }

    colour_classes.sort_by_key(|c| std::cmp::Reverse(c.len()));

    let mut colour = 0usize;
    let mut i = 0usize;
    for class in &colour_classes {
        colour += 1;
        for &v in class {
            p_order[i] = v;
            p_bounds[i] = colour;
            i += 1;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_plus_isolated() -> BitGraph<1> {
        // 0-1-2 triangle, 3 isolated: colours {0,1,2} each own colour, {3} any colour.
        let mut g: BitGraph<1> = BitGraph::new(4);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(0, 2);
        g
    }

    fn full_p() -> FixedBitSet<1> {
        let mut p = FixedBitSet::new();
        p.set_up_to(4);
        p
    }

    #[test]
    fn no_sorting_bounds_are_non_decreasing_and_cover_all() {
        let g = triangle_plus_isolated();
        let p = full_p();
        let mut order = [0usize; 64];
        let mut bounds = [0usize; 64];
        let k = colour_class_order(ColoringVariant::NoSorting, &g, &p, &mut order, &mut bounds);
        assert_eq!(k, 4);
        for w in bounds[..k].windows(2) {
            assert!(w[0] <= w[1]);
        }
        let mut seen: Vec<usize> = order[..k].to_vec();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn same_colour_vertices_are_non_adjacent() {
        let g = triangle_plus_isolated();
        let p = full_p();
        let mut order = [0usize; 64];
        let mut bounds = [0usize; 64];
        let k = colour_class_order(ColoringVariant::NoSorting, &g, &p, &mut order, &mut bounds);
        for a in 0..k {
            for b in (a + 1)..k {
                if bounds[a] == bounds[b] {
                    let mut row_a = FixedBitSet::<1>::new();
                    row_a.set(order[a]);
                    g.intersect_with_row(order[b], &mut row_a);
                    assert!(row_a.is_empty(), "same-colour vertices must be non-adjacent");
                }
            }
        }
    }

    #[test]
    fn defer1_moves_singleton_classes_to_the_tail() {
        let g = triangle_plus_isolated();
        let p = full_p();
        let mut order = [0usize; 64];
        let mut bounds = [0usize; 64];
        let k = colour_class_order(ColoringVariant::Defer1, &g, &p, &mut order, &mut bounds);
        assert_eq!(k, 4);
        assert!(bounds[..k].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn full_sort_orders_classes_by_non_increasing_size() {
        let g = triangle_plus_isolated();
        let p = full_p();
        let mut order = [0usize; 64];
        let mut bounds = [0usize; 64];
        let k = colour_class_order(ColoringVariant::FullSort, &g, &p, &mut order, &mut bounds);
        assert_eq!(k, 4);
        // the triangle forces 3 singleton colour classes plus one for the
        // isolated vertex; full_sort's class-size ordering is still a valid
        // non-decreasing p_bounds sequence.
        assert!(bounds[..k].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn all_variants_agree_on_number_of_colours_used_on_complete_graph() {
        let mut g: BitGraph<1> = BitGraph::new(5);
        for i in 0..5 {
            for j in (i + 1)..5 {
                g.add_edge(i, j);
            }
        }
        let mut p = FixedBitSet::new();
        p.set_up_to(5);
        for variant in [ColoringVariant::NoSorting, ColoringVariant::Defer1, ColoringVariant::FullSort] {
            let mut order = [0usize; 64];
            let mut bounds = [0usize; 64];
            let k = colour_class_order(variant, &g, &p, &mut order, &mut bounds);
            assert_eq!(k, 5);
            assert_eq!(bounds[k - 1], 5); // complete graph: every vertex its own colour
        }
    }
}
