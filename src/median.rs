use multiversx_sc::imports::*;

/// Returns the sorted middle, or the average of the two middle elements if
/// the list has an even number of elements. `None` for an empty list.
pub fn calculate<M: ManagedTypeApi>(list: &mut [BigUint<M>]) -> Option<BigUint<M>> {
    if list.is_empty() {
        return None;
    }
    list.sort_unstable();
    let len = list.len();
    let middle_index = len / 2;
    if len % 2 == 0 {
        let lower = &list[middle_index - 1];
        let upper = &list[middle_index];
        Some((lower.clone() + upper.clone()) / 2u64)
    } else {
        Some(list[middle_index].clone())
    }
}
