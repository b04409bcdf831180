use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use alloc::vec::Vec;

use compositional_layout::{
    EdgeInsets, FrameTransform, LayoutEnvironment, LayoutError, MeasurementMap,
    OrthogonalScroll, Point, ResolvedSection, ScrollInvalidationDriver, Section, Size,
    paging_target_offset, resolve_section,
};

use crate::{Easing, Tween};

/// Builds the section for an index, or `None` when no section exists there.
///
/// The controller calls it at most once per distinct index.
pub type SectionProvider = Arc<dyn Fn(usize) -> Option<Section> + Send + Sync>;

/// The result of advancing a section's scroll animation by one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub section: usize,
    pub offset: Point,
    pub transforms: Vec<FrameTransform>,
}

#[derive(Clone, Debug)]
struct SectionState {
    section: Option<Section>,
    measurements: MeasurementMap,
    scroll_offset: Point,
    resolved: Option<ResolvedSection>,
    tween: Option<Tween>,
}

impl SectionState {
    fn new(section: Option<Section>) -> Self {
        Self {
            section,
            measurements: MeasurementMap::new(),
            scroll_offset: Point::ZERO,
            resolved: None,
            tween: None,
        }
    }

    fn environment(&self, base: &LayoutEnvironment) -> LayoutEnvironment {
        base.clone()
            .with_measurements(self.measurements.clone())
            .with_scroll_offset(self.scroll_offset)
    }
}

/// A framework-neutral controller that owns the host's section registry and drives resolution.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_environment` when the container size or insets change
/// - `measure` when a view's real size for an `Estimated` dimension is known
/// - `on_scroll` when an orthogonal section scrolls, `end_scroll` when the gesture ends
/// - `tick(now_ms)` each frame while paging snaps animate
///
/// Resolved sections are cached until something that affects geometry changes; scroll offsets
/// never trigger re-resolution.
#[derive(Clone)]
pub struct LayoutController {
    provider: SectionProvider,
    item_counts: Vec<usize>,
    environment: LayoutEnvironment,
    states: BTreeMap<usize, SectionState>,
}

impl LayoutController {
    /// `item_counts[i]` is the number of data items in section `i`.
    pub fn from_fn(
        provider: impl Fn(usize) -> Option<Section> + Send + Sync + 'static,
        item_counts: impl IntoIterator<Item = usize>,
        container_size: Size,
    ) -> Self {
        Self::new(Arc::new(provider), item_counts, container_size)
    }

    pub fn new(
        provider: SectionProvider,
        item_counts: impl IntoIterator<Item = usize>,
        container_size: Size,
    ) -> Self {
        Self {
            provider,
            item_counts: item_counts.into_iter().collect(),
            environment: LayoutEnvironment::new(container_size),
            states: BTreeMap::new(),
        }
    }

    pub fn section_count(&self) -> usize {
        self.item_counts.len()
    }

    pub fn item_count(&self, section: usize) -> Option<usize> {
        self.item_counts.get(section).copied()
    }

    pub fn environment(&self) -> &LayoutEnvironment {
        &self.environment
    }

    /// Replaces the container geometry. Every cached layout is dropped.
    pub fn set_environment(&mut self, container_size: Size, content_insets: EdgeInsets) {
        let next = LayoutEnvironment::new(container_size).with_content_insets(content_insets);
        if next == self.environment {
            return;
        }
        ldebug!(
            width = container_size.width,
            height = container_size.height,
            "set_environment"
        );
        self.environment = next;
        for state in self.states.values_mut() {
            state.resolved = None;
        }
    }

    pub fn set_item_count(&mut self, section: usize, count: usize) -> Result<(), LayoutError> {
        let slot = self
            .item_counts
            .get_mut(section)
            .ok_or(LayoutError::UnknownSectionIndex { index: section })?;
        if *slot == count {
            return Ok(());
        }
        *slot = count;
        if let Some(state) = self.states.get_mut(&section) {
            state.resolved = None;
        }
        Ok(())
    }

    fn state(&mut self, index: usize) -> Result<&mut SectionState, LayoutError> {
        if index >= self.item_counts.len() {
            return Err(LayoutError::UnknownSectionIndex { index });
        }
        let provider = &self.provider;
        let state = self.states.entry(index).or_insert_with(|| {
            ldebug!(index, "building section");
            SectionState::new(provider(index))
        });
        if state.section.is_none() {
            return Err(LayoutError::UnknownSectionIndex { index });
        }
        Ok(state)
    }

    /// Returns the section at `index`, building it on first access.
    pub fn section(&mut self, index: usize) -> Result<&Section, LayoutError> {
        self.state(index)?
            .section
            .as_ref()
            .ok_or(LayoutError::UnknownSectionIndex { index })
    }

    /// Resolves section `index` in section-local coordinates (cached until invalidated).
    pub fn layout_section(&mut self, index: usize) -> Result<&ResolvedSection, LayoutError> {
        let item_count = self.item_count(index).unwrap_or(0);
        let base = self.environment.clone();
        let state = self.state(index)?;
        let resolved = match state.resolved.take() {
            Some(resolved) => resolved,
            None => {
                let section = state
                    .section
                    .as_ref()
                    .ok_or(LayoutError::UnknownSectionIndex { index })?;
                ltrace!(index, item_count, "resolving section");
                resolve_section(section, &state.environment(&base), item_count)?
            }
        };
        let resolved: &ResolvedSection = state.resolved.insert(resolved);
        Ok(resolved)
    }

    /// Resolves every section and stacks them vertically in collection coordinates.
    pub fn layout(&mut self) -> Result<Vec<ResolvedSection>, LayoutError> {
        let mut y = 0.0f32;
        let mut out = Vec::with_capacity(self.item_counts.len());
        for index in 0..self.item_counts.len() {
            let resolved = self.layout_section(index)?.translated(0.0, y);
            y += resolved.content_size.height;
            out.push(resolved);
        }
        Ok(out)
    }

    /// Records the host-measured size of item `index` in `section`.
    ///
    /// Returns `true` when the measurement changed, in which case the next layout call runs a
    /// second resolution pass with the corrected value.
    pub fn measure(
        &mut self,
        section: usize,
        index: usize,
        size: Size,
    ) -> Result<bool, LayoutError> {
        let state = self.state(section)?;
        if state.measurements.get(&index) == Some(&size) {
            return Ok(false);
        }
        ltrace!(section, index, width = size.width, height = size.height, "measure");
        state.measurements.insert(index, size);
        state.resolved = None;
        Ok(true)
    }

    pub fn scroll_offset(&self, section: usize) -> Option<Point> {
        self.states.get(&section).map(|s| s.scroll_offset)
    }

    pub fn is_animating(&self, section: usize) -> bool {
        self.states
            .get(&section)
            .is_some_and(|s| s.tween.is_some())
    }

    /// Call this when the UI reports a scroll offset change for `section`.
    ///
    /// Cancels any active snap animation and returns the section's presentation transforms.
    pub fn on_scroll(
        &mut self,
        section: usize,
        offset: Point,
    ) -> Result<Vec<FrameTransform>, LayoutError> {
        let state = self.state(section)?;
        state.tween = None;
        state.scroll_offset = offset;
        self.invalidate(section)
    }

    /// Call this when a scroll gesture on `section` ends.
    ///
    /// For paging sections, starts a snap animation and returns its target offset.
    pub fn end_scroll(
        &mut self,
        section: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Result<Option<f32>, LayoutError> {
        self.layout_section(section)?;
        let base = &self.environment;
        let Some(state) = self.states.get_mut(&section) else {
            return Err(LayoutError::UnknownSectionIndex { index: section });
        };
        let (Some(s), Some(resolved)) = (&state.section, &state.resolved) else {
            return Err(LayoutError::UnknownSectionIndex { index: section });
        };
        if s.orthogonal_scroll != OrthogonalScroll::GroupPagingCentered {
            return Ok(None);
        }
        let from = state.scroll_offset.x;
        let to = paging_target_offset(s, resolved, from, &state.environment(base));
        if to == from {
            return Ok(None);
        }
        ldebug!(section, from, to, "paging snap");
        state.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        Ok(Some(to))
    }

    /// Advances every running snap animation.
    pub fn tick(&mut self, now_ms: u64) -> Result<Vec<ScrollUpdate>, LayoutError> {
        let animating: Vec<usize> = self
            .states
            .iter()
            .filter(|(_, s)| s.tween.is_some())
            .map(|(index, _)| *index)
            .collect();

        let mut updates = Vec::with_capacity(animating.len());
        for section in animating {
            let Some(state) = self.states.get_mut(&section) else {
                continue;
            };
            let Some(tween) = state.tween else {
                continue;
            };
            state.scroll_offset.x = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                state.tween = None;
            }
            let offset = state.scroll_offset;
            let transforms = self.invalidate(section)?;
            updates.push(ScrollUpdate {
                section,
                offset,
                transforms,
            });
        }
        Ok(updates)
    }

    fn invalidate(&mut self, section: usize) -> Result<Vec<FrameTransform>, LayoutError> {
        self.layout_section(section)?;
        let state = self
            .states
            .get(&section)
            .ok_or(LayoutError::UnknownSectionIndex { index: section })?;
        let (Some(s), Some(resolved)) = (&state.section, &state.resolved) else {
            return Err(LayoutError::UnknownSectionIndex { index: section });
        };
        Ok(ScrollInvalidationDriver::invalidate(
            s,
            resolved,
            &state.environment(&self.environment),
        ))
    }
}

impl core::fmt::Debug for LayoutController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutController")
            .field("item_counts", &self.item_counts)
            .field("environment", &self.environment)
            .field("built_sections", &self.states.len())
            .finish_non_exhaustive()
    }
}
