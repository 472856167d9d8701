use super::image_harvester::ImageHarvest;
use super::ownership::OwnershipIndex;
use super::slug::slugify;
use super::summary::DeclaredTotals;
use crate::models::Series;

/// Merge ownership, declared totals and images into output series, ordered
/// by display name.
pub fn build_series(
    ownership: &OwnershipIndex,
    totals: &DeclaredTotals,
    images: &ImageHarvest,
    publisher: &str,
) -> Vec<Series> {
    ownership
        .iter()
        .map(|(name, owned)| {
            let max_owned = owned.max_volume().unwrap_or(0);
            // A stale summary row must not hide issues we actually own.
            let total_issues = totals
                .get(name)
                .map_or(max_owned, |declared| declared.max(max_owned));

            Series {
                id: slugify(name),
                name: name.clone(),
                publisher: publisher.to_string(),
                total_issues,
                owned_cover_a: owned.owned_cover_a(),
                owned_other: owned.owned_other(),
                image_url: images.series_image(name).unwrap_or_default().to_string(),
                issue_images: images.issue_images(name),
                issue_covers: images.issue_covers(name),
            }
        })
        .collect()
}
