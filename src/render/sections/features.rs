use crate::content::{ItemKind, Section};
use crate::i18n::TextSource;
use crate::render::sections::{frame_for, header_slots, tile};
use crate::render::view_models::FeaturesView;

pub fn build_features(section: &Section, texts: &dyn TextSource) -> FeaturesView {
    FeaturesView {
        frame: frame_for(section),
        header: header_slots(section, texts),
        features: section
            .items_of(ItemKind::Feature)
            .map(|item| tile(item, texts))
            .collect(),
    }
}
