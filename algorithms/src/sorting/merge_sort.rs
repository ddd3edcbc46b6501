//! Top-down merge sort.
//!
//! The divide tree is walked post-order from an explicit stack; one scratch
//! buffer the size of the whole input backs every merge.
//!
//! Equations:
//!   mid = (left + right) / 2
//!   merge(left, mid, right): arr[left..=right] = stable_merge(arr[left..=mid], arr[mid+1..=right])

pub fn merge_sort<T: Ord + Copy>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let mut scratch = arr.to_vec();
    let mut stack = vec![Frame { left: 0, right: arr.len() - 1, halves_sorted: false }];

    while let Some(frame) = stack.pop() {
        if frame.left >= frame.right {
            continue;
        }
        let mid = frame.left + (frame.right - frame.left) / 2;
        if frame.halves_sorted {
            merge(arr, &mut scratch, frame.left, mid, frame.right);
        } else {
            stack.push(Frame { halves_sorted: true, ..frame });
            stack.push(Frame { left: mid + 1, right: frame.right, halves_sorted: false });
            stack.push(Frame { left: frame.left, right: mid, halves_sorted: false });
        }
    }
}

#[derive(Clone, Copy)]
struct Frame {
    left: usize,
    right: usize,
    halves_sorted: bool,
}

fn merge<T: Ord + Copy>(arr: &mut [T], scratch: &mut [T], left: usize, mid: usize, right: usize) {
    scratch[left..=right].copy_from_slice(&arr[left..=right]);

    let (mut l, mut r, mut out) = (left, mid + 1, left);
    while l <= mid && r <= right {
        if scratch[l] <= scratch[r] {
            arr[out] = scratch[l];
            l += 1;
        } else {
            arr[out] = scratch[r];
            r += 1;
        }
        out += 1;
    }
    let rest = if l <= mid { l..=mid } else { r..=right };
    for i in rest {
        arr[out] = scratch[i];
        out += 1;
    }
}
