use ordered_containers::sort::{heap_sort, tree_sort};

#[quickcheck]
fn heap_sort_matches_std(xs: Vec<i32>) -> bool {
    let mut expected = xs.clone();
    expected.sort();
    heap_sort(xs) == expected
}

#[quickcheck]
fn tree_sort_matches_std(xs: Vec<i32>) -> bool {
    let mut expected = xs.clone();
    expected.sort();
    tree_sort(xs) == expected
}
