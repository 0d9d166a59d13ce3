//! Line annotation: branch, element, relative, beast and markers per line.
//!
//! Relatives are always taken against the original palace element, for the
//! changed branch as well. The element interaction of a moving line is read
//! from the changed element towards the original one.

use liuyao_base::{
    ALL_POSITIONS, Branch, DerivedHexagrams, FourPillars, LinePosition, PalaceInfo, SixRelative,
    branch_element, branch_interaction, element_interaction, six_beasts, six_relative,
};
use tracing::trace;

use crate::reading_types::{AnnotatedLine, ChangedLine};

/// Annotate all six lines of a cast.
pub fn annotate_lines(
    derived: &DerivedHexagrams,
    palace: &PalaceInfo,
    pillars: &FourPillars,
    useful_spirit: Option<SixRelative>,
) -> [AnnotatedLine; 6] {
    let polarities = derived.original.lines();
    let branches = derived.original.branches();
    let changed_branches = derived.transformed.branches();
    let beasts = six_beasts(pillars.day.stem);

    std::array::from_fn(|i| {
        let position = ALL_POSITIONS[i];
        let branch = branches[i];
        let element = branch_element(branch);
        let relative = six_relative(palace.element, element);
        let is_moving = position == derived.moving_line;
        let changed = if is_moving {
            Some(changed_line(
                derived,
                position,
                branch,
                changed_branches[i],
                palace,
            ))
        } else {
            None
        };
        let line = AnnotatedLine {
            position,
            polarity: polarities[i],
            branch,
            element,
            relative,
            beast: beasts[i],
            is_world: palace.world == position.get(),
            is_response: palace.response == position.get(),
            is_moving,
            is_void: pillars.is_void(branch),
            is_useful_spirit: useful_spirit == Some(relative),
            changed,
        };
        trace!(
            line = position.get(),
            branch = branch.name(),
            relative = relative.name(),
            moving = is_moving,
            "annotated line"
        );
        line
    })
}

/// Attributes of the moving line after its flip.
pub fn changed_line(
    derived: &DerivedHexagrams,
    position: LinePosition,
    original: Branch,
    changed: Branch,
    palace: &PalaceInfo,
) -> ChangedLine {
    let element = branch_element(changed);
    ChangedLine {
        polarity: derived.transformed.line(position),
        branch: changed,
        element,
        relative: six_relative(palace.element, element),
        interaction: element_interaction(element, branch_element(original)),
        branch_interaction: branch_interaction(original, changed),
    }
}
