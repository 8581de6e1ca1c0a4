use alloc::collections::BTreeMap;

use crate::algo::MaxFlowSolution;
use crate::capacity::Capacity;
use crate::edge::Edge;
use crate::error::Error;

/// Verifies a solution against the network it was computed for.
///
/// Every flow must lie within `0..=capacity` and balance at non-terminal vertices. The source has
/// to emit exactly `value`, which must also be the capacity of the reported (saturated) cut.
///
/// Repeated `(from, to)` pairs are checked as the single edge they were collapsed into (the last
/// occurrence).
pub fn check<C: Capacity>(
    edges: &[Edge<C>],
    solution: &MaxFlowSolution<C>,
    source: usize,
    sink: usize,
) -> Result<(), Error> {
    let mut effective = BTreeMap::new();
    for (index, e) in edges.iter().enumerate() {
        let flow = *solution
            .flows
            .get(index)
            .ok_or(Error::CapacityViolated { index })?;
        effective.insert((e.from, e.to), (index, e.capacity, flow));
    }

    if let Some((index, ..)) = effective
        .values()
        .find(|(_, capacity, flow)| flow.is_negative() || flow > capacity)
    {
        return Err(Error::CapacityViolated { index: *index });
    }

    // (inflow, outflow) per vertex
    let balances = effective.iter().try_fold(
        BTreeMap::<usize, (C, C)>::new(),
        |mut acc, (&(from, to), &(_, _, flow))| {
            let outflow = &mut acc.entry(from).or_default().1;
            *outflow = outflow
                .checked_add(&flow)
                .ok_or(Error::ArithmeticOverflow)?;
            let inflow = &mut acc.entry(to).or_default().0;
            *inflow = inflow.checked_add(&flow).ok_or(Error::ArithmeticOverflow)?;
            Ok::<_, Error>(acc)
        },
    )?;

    for (&vertex, &(inflow, outflow)) in &balances {
        if vertex != source && vertex != sink && inflow != outflow {
            return Err(Error::ConservationViolated { vertex });
        }
    }

    let value = solution.value;
    let (source_in, source_out) = balances.get(&source).copied().unwrap_or_default();
    let (sink_in, sink_out) = balances.get(&sink).copied().unwrap_or_default();
    let emitted = source_in
        .checked_add(&value)
        .ok_or(Error::ArithmeticOverflow)?;
    let absorbed = sink_out
        .checked_add(&value)
        .ok_or(Error::ArithmeticOverflow)?;
    if source == sink {
        if !value.is_zero() || source_in != source_out {
            return Err(Error::ValueMismatch);
        }
    } else if source_out != emitted || sink_in != absorbed {
        return Err(Error::ValueMismatch);
    }

    let cut = &solution.min_cut;
    if cut.capacity != value || (source != sink && !cut.separates(source, sink)) {
        return Err(Error::CutMismatch);
    }
    let saturated = cut.edges.iter().all(|pair| {
        effective
            .get(pair)
            .map_or(false, |(_, capacity, flow)| flow == capacity)
    });
    if !saturated {
        return Err(Error::CutMismatch);
    }

    log::debug!("      edges: {}", effective.len());
    log::debug!("   vertices: {}", balances.len());
    log::debug!("   max flow: {value}");
    log::debug!("cut edges: {}", cut.edges.len());
    log::debug!("source side: {:?}", cut.source_side);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::ford_fulkerson::FordFulkerson;
    use crate::algo::MaxFlow;
    use alloc::vec::Vec;

    fn scenario() -> (Vec<Edge<i64>>, MaxFlowSolution<i64>) {
        let edges: Vec<Edge<i64>> = [(0, 1, 3), (0, 2, 5), (1, 3, 2), (2, 3, 3), (1, 2, 1)]
            .into_iter()
            .map(Edge::from)
            .collect();
        let solution = FordFulkerson::default().max_flow(&edges, 0, 3).unwrap();
        (edges, solution)
    }

    #[test]
    fn accepts_a_computed_solution() {
        let (edges, solution) = scenario();
        assert_eq!(check(&edges, &solution, 0, 3), Ok(()));
    }

    #[test]
    fn detects_overfull_edges() {
        let (edges, mut solution) = scenario();
        solution.flows[2] = 4;
        assert_eq!(
            check(&edges, &solution, 0, 3),
            Err(Error::CapacityViolated { index: 2 })
        );
    }

    #[test]
    fn detects_unbalanced_vertices() {
        let (edges, mut solution) = scenario();
        solution.flows[2] -= 1;
        assert_eq!(
            check(&edges, &solution, 0, 3),
            Err(Error::ConservationViolated { vertex: 1 })
        );
    }

    #[test]
    fn detects_a_wrong_value() {
        let (edges, mut solution) = scenario();
        solution.value += 1;
        assert_eq!(check(&edges, &solution, 0, 3), Err(Error::ValueMismatch));
    }

    #[test]
    fn detects_a_wrong_cut() {
        let (edges, mut solution) = scenario();
        solution.min_cut.capacity += 1;
        assert_eq!(check(&edges, &solution, 0, 3), Err(Error::CutMismatch));
    }
}
