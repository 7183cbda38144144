//! Property tests for document filtering

use proptest::prelude::*;
use tokselect_core::*;

fn any_document() -> impl Strategy<Value = Document> {
    prop::collection::vec(1u32..8, 0..40)
}

fn any_dictionary() -> impl Strategy<Value = Dictionary> {
    prop::collection::vec(prop::collection::vec(1u32..8, 1..4), 0..6)
        .prop_map(|entries| Dictionary::from_sequences(entries).unwrap())
}

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Keep), Just(Mode::Remove)]
}

fn any_window() -> impl Strategy<Value = Window> {
    (0usize..4, 0usize..4).prop_map(|(left, right)| Window::new(left, right))
}

proptest! {
    #[test]
    fn padding_preserves_length(
        doc in any_document(),
        dictionary in any_dictionary(),
        mode in any_mode(),
        window in any_window()
    ) {
        let options = SelectOptions::new(mode)
            .with_padding(PaddingPolicy::Pad)
            .with_window(window);
        let filtered = filter_document(doc.clone(), &dictionary, options);
        prop_assert_eq!(filtered.len(), doc.len());
    }

    #[test]
    fn compact_equals_pad_without_padding(
        doc in any_document(),
        dictionary in any_dictionary(),
        mode in any_mode(),
        window in any_window()
    ) {
        let options = SelectOptions::new(mode).with_window(window);
        let padded = filter_document(doc.clone(), &dictionary, options.with_padding(PaddingPolicy::Pad));
        let compacted = filter_document(doc.clone(), &dictionary, options.with_padding(PaddingPolicy::Compact));

        let stripped: Document = padded.into_iter().filter(|&token| token != PAD).collect();
        prop_assert!(compacted.len() <= doc.len());
        prop_assert_eq!(compacted, stripped);
    }

    #[test]
    fn remove_pad_is_idempotent(
        doc in any_document(),
        dictionary in any_dictionary(),
        window in any_window()
    ) {
        let options = SelectOptions::new(Mode::Remove)
            .with_padding(PaddingPolicy::Pad)
            .with_window(window);
        let once = filter_document(doc, &dictionary, options);
        let twice = filter_document(once.clone(), &dictionary, options);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn keep_and_remove_partition_positions(
        doc in any_document(),
        dictionary in any_dictionary(),
        window in any_window()
    ) {
        let kept = filter_document(
            doc.clone(),
            &dictionary,
            SelectOptions::new(Mode::Keep).with_padding(PaddingPolicy::Pad).with_window(window),
        );
        let removed = filter_document(
            doc.clone(),
            &dictionary,
            SelectOptions::new(Mode::Remove).with_padding(PaddingPolicy::Pad).with_window(window),
        );

        for ((&original, &k), &r) in doc.iter().zip(&kept).zip(&removed) {
            prop_assert!(k == PAD || r == PAD);
            prop_assert_eq!(k.max(r), original);
        }
    }

    #[test]
    fn empty_document_stays_empty(
        dictionary in any_dictionary(),
        mode in any_mode(),
        padding in any::<bool>(),
        window in any_window()
    ) {
        let options = SelectOptions::new(mode).with_padding(padding).with_window(window);
        prop_assert!(filter_document(Vec::new(), &dictionary, options).is_empty());
    }
}
