pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    for i in (0..len / 2).rev() {
        sift_down(arr, len, i);
    }
    for i in (1..len).rev() {
        arr.swap(0, i);
        sift_down(arr, i, 0);
    }
}

/// Restores the max-heap property below `i` within `arr[..n]`.
fn sift_down<T: Ord>(arr: &mut [T], n: usize, mut i: usize) {
    loop {
        let mut largest = i;
        let l = 2 * i + 1;
        let r = 2 * i + 2;

        if l < n && arr[l] > arr[largest] {
            largest = l;
        }
        if r < n && arr[r] > arr[largest] {
            largest = r;
        }
        if largest == i {
            return;
        }
        arr.swap(i, largest);
        i = largest;
    }
}
