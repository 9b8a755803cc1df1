//! One-level list combinators.
//!
//! These are the small building blocks the rest of the crate is assembled
//! from:
//!
//! - [`cat`]: Concatenate several sequences into one
//! - [`cons`] / [`construct`]: Prepend an element
//! - [`mapcat`]: Map each element to a sequence and concatenate the results
//! - [`butlast`]: Drop the final element
//! - [`interpose`]: Place a separator between consecutive elements
//!
//! All of them consume their inputs and return a fresh `Vec`. Flattening is
//! always exactly one level deep.
//!
//! # Examples
//!
//! ```
//! use combinate::sequence::{cat, cons, interpose, mapcat};
//!
//! assert_eq!(cat([vec![1, 2], vec![3], vec![]]), vec![1, 2, 3]);
//! assert_eq!(cons(0, vec![1, 2]), vec![0, 1, 2]);
//! assert_eq!(mapcat(|value| [value, value * 10], vec![1, 2]), vec![1, 10, 2, 20]);
//! assert_eq!(interpose(",", vec!["a", "b", "c"]), vec!["a", ",", "b", ",", "c"]);
//! ```
//!
//! # Laws
//!
//! - `cat([a, b]).len() == a.len() + b.len()`
//! - `mapcat(f, seq) == cat(seq.map(f))`
//! - `interpose(separator, [])` is empty and `interpose(separator, [a]) == [a]`

/// Concatenates every sequence in `sequences`, preserving relative order.
///
/// Only one level is flattened: a `Vec<Vec<Vec<T>>>` becomes a `Vec<Vec<T>>`.
///
/// # Examples
///
/// ```
/// use combinate::sequence::cat;
///
/// assert_eq!(cat([vec![1, 2, 3], vec![4, 5], vec![6, 7]]), vec![1, 2, 3, 4, 5, 6, 7]);
///
/// let empty: Vec<Vec<i32>> = Vec::new();
/// assert!(cat(empty).is_empty());
/// ```
pub fn cat<T, S, I>(sequences: I) -> Vec<T>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    sequences.into_iter().flatten().collect()
}

/// Returns `head` followed by every element of `tail`.
///
/// # Examples
///
/// ```
/// use combinate::sequence::cons;
///
/// assert_eq!(cons(42, vec![1, 2, 3]), vec![42, 1, 2, 3]);
/// assert_eq!(cons("only", Vec::new()), vec!["only"]);
/// ```
pub fn cons<T, I>(head: T, tail: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let tail = tail.into_iter();
    let mut result = Vec::with_capacity(tail.size_hint().0 + 1);
    result.push(head);
    result.extend(tail);
    result
}

/// Alias of [`cons`].
#[inline]
pub fn construct<T, I>(head: T, tail: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    cons(head, tail)
}

/// Applies `function` to every element and concatenates the produced
/// sequences one level deep.
///
/// `function` must return a sequence for every element, possibly empty.
///
/// # Examples
///
/// ```
/// use combinate::sequence::mapcat;
///
/// let doubled = mapcat(|value: i32| vec![value, value], vec![1, 2, 3]);
/// assert_eq!(doubled, vec![1, 1, 2, 2, 3, 3]);
///
/// let evens_only = mapcat(|value: i32| (value % 2 == 0).then_some(value), 1..=6);
/// assert_eq!(evens_only, vec![2, 4, 6]);
/// ```
pub fn mapcat<T, U, S, I, F>(function: F, sequence: I) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    S: IntoIterator<Item = U>,
    F: FnMut(T) -> S,
{
    sequence.into_iter().flat_map(function).collect()
}

/// Returns every element except the last one.
///
/// # Examples
///
/// ```
/// use combinate::sequence::butlast;
///
/// assert_eq!(butlast(vec![1, 2, 3]), vec![1, 2]);
/// assert!(butlast(Vec::<i32>::new()).is_empty());
/// ```
pub fn butlast<T, I>(sequence: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let mut result: Vec<T> = sequence.into_iter().collect();
    result.pop();
    result
}

/// Places `separator` between each pair of consecutive elements.
///
/// Nothing is inserted before the first element or after the last one.
///
/// # Examples
///
/// ```
/// use combinate::sequence::interpose;
///
/// assert_eq!(interpose(0, vec![1, 2, 3]), vec![1, 0, 2, 0, 3]);
/// assert_eq!(interpose(0, vec![1]), vec![1]);
/// assert!(interpose(0, Vec::<i32>::new()).is_empty());
/// ```
pub fn interpose<T, I>(separator: T, sequence: I) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    butlast(mapcat(|element| [element, separator.clone()], sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_flattens_only_one_level() {
        let nested = cat([vec![vec![1], vec![2]], vec![vec![3]]]);
        assert_eq!(nested, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_cons_onto_iterator() {
        assert_eq!(cons('a', "bc".chars()), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_interpose_with_strings() {
        let joined: String = interpose(String::from(" "), ["a", "b"].map(String::from))
            .concat();
        assert_eq!(joined, "a b");
    }
}
