use std::rc::Rc;

/// One node of the hierarchical segmentation result.
///
/// `rest: None` means `word` exhausts the input at this point. Otherwise
/// `rest` lists every segmentation of the remaining text. Subtree lists sit
/// behind `Rc` because the splitter memoizes on remainders: one remainder's
/// subtree is shared by every prefix that reaches it, not copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTree {
    pub word: String,
    pub rest: Option<Rc<Vec<SplitTree>>>,
}

/// Expand a list of alternatives into linear word sequences, one per leaf
/// path of the tree.
pub fn flatten(trees: &[SplitTree]) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    for tree in trees {
        match &tree.rest {
            None => out.push(vec![tree.word.clone()]),
            Some(rest) => {
                for tail in flatten(rest) {
                    let mut seq = Vec::with_capacity(tail.len() + 1);
                    seq.push(tree.word.clone());
                    seq.extend(tail);
                    out.push(seq);
                }
            }
        }
    }
    out
}

/// Order sequences by the length of their longest segment, descending.
pub fn sort_by_longest_segment(seqs: &mut [Vec<String>]) {
    seqs.sort_by_key(|seq| {
        let longest = seq.iter().map(|w| w.len()).max().unwrap_or(0);
        std::cmp::Reverse(longest)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(word: &str) -> SplitTree {
        SplitTree {
            word: word.to_string(),
            rest: None,
        }
    }

    fn node(word: &str, rest: Vec<SplitTree>) -> SplitTree {
        SplitTree {
            word: word.to_string(),
            rest: Some(Rc::new(rest)),
        }
    }

    #[test]
    fn test_flatten_single_leaf() {
        assert_eq!(flatten(&[leaf("asi")]), vec![vec!["asi".to_string()]]);
    }

    #[test]
    fn test_flatten_chain_and_alternatives() {
        let trees = vec![
            node("tat", vec![node("tvam", vec![leaf("asi")])]),
            node("tattvam", vec![leaf("asi")]),
        ];
        assert_eq!(
            flatten(&trees),
            vec![
                vec!["tat".to_string(), "tvam".to_string(), "asi".to_string()],
                vec!["tattvam".to_string(), "asi".to_string()],
            ]
        );
    }

    #[test]
    fn test_flatten_counts_leaf_paths() {
        // Two alternatives under one head, two heads: four paths.
        let shared = Rc::new(vec![leaf("ca"), leaf("na")]);
        let trees = vec![
            SplitTree {
                word: "iti".to_string(),
                rest: Some(Rc::clone(&shared)),
            },
            SplitTree {
                word: "eva".to_string(),
                rest: Some(shared),
            },
        ];
        assert_eq!(flatten(&trees).len(), 4);
    }

    #[test]
    fn test_flatten_is_pure() {
        let trees = vec![node("tat", vec![leaf("tvam")])];
        assert_eq!(flatten(&trees), flatten(&trees));
    }

    #[test]
    fn test_sort_puts_longest_segment_first() {
        let mut seqs = vec![
            vec!["tat".to_string(), "tvam".to_string(), "asi".to_string()],
            vec!["tattvam".to_string(), "asi".to_string()],
        ];
        sort_by_longest_segment(&mut seqs);
        assert_eq!(seqs[0][0], "tattvam");

        let longest_first = seqs[0].iter().map(|w| w.len()).max().unwrap();
        for seq in &seqs {
            assert!(seq.iter().map(|w| w.len()).max().unwrap() <= longest_first);
        }
    }
}
