use catalog::links::collection_url;
use foundation::{CategorySlug, Handle, RegionId};

use crate::config::{HighlightConfig, MapConfig};
use crate::element::{HoverLabel, MapDocument, MapElement};
use crate::lookup::LabelScope;
use crate::snapshot::StyleSnapshot;

/// One region found in the map document.
#[derive(Debug, Clone)]
pub struct RegionBinding<E> {
    pub region: RegionId,
    pub category: CategorySlug,
    pub name: String,
    pub shape: E,
    pub labels: Vec<E>,
    snapshot: StyleSnapshot,
}

/// Pending debounced clear.
///
/// Index is the region slot that scheduled it; the generation is bumped by
/// every enter, leave and explicit clear, so only a ticket carrying the
/// current generation fires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClearTicket(Handle);

impl ClearTicket {
    pub fn region_index(&self) -> usize {
        self.0.index() as usize
    }
}

/// Where a region click should take the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub region: RegionId,
    pub category: CategorySlug,
    pub url: String,
}

/// What binding found; the caller decides how to log it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BindReport {
    pub regions_bound: Vec<RegionId>,
    pub missing_regions: Vec<RegionId>,
    pub unlabeled_regions: Vec<RegionId>,
    pub label_groups: usize,
    pub labels_bound: usize,
}

impl BindReport {
    /// One line per region that is missing or has no labels.
    pub fn warnings(&self) -> Vec<String> {
        let missing = self
            .missing_regions
            .iter()
            .map(|id| format!("region shape #{id} not found"));
        let unlabeled = self
            .unlabeled_regions
            .iter()
            .map(|id| format!("no label elements mapped to {id}"));
        missing.chain(unlabeled).collect()
    }
}

/// Single-active-region highlight state for one map document.
///
/// Owned by the page session; dropping the session must call
/// [`HighlightController::teardown`].
#[derive(Debug)]
pub struct HighlightController<E, L> {
    config: HighlightConfig,
    bindings: Vec<RegionBinding<E>>,
    hover_label: Option<L>,
    active: Option<usize>,
    clear_generation: u32,
    pending_clear: Option<ClearTicket>,
}

impl<E, L> HighlightController<E, L>
where
    E: MapElement,
    L: HoverLabel,
{
    /// Finds shapes in `svg`, labels in `svg` and `host`, prepares them for
    /// pointer interaction and snapshots every shape.
    ///
    /// Missing regions are reported and skipped; binding never fails.
    pub fn bind<D>(
        config: &MapConfig,
        svg: &D,
        host: Option<&D>,
        hover_label: Option<L>,
    ) -> (Self, BindReport)
    where
        D: MapDocument<Element = E>,
    {
        let highlight = config.highlight.clone();
        let mut report = BindReport::default();
        let mut bindings: Vec<RegionBinding<E>> = Vec::new();

        for spec in config.regions.iter() {
            let Some(shape) = svg.element_by_id(spec.id.as_str()) else {
                report.missing_regions.push(spec.id.clone());
                continue;
            };
            prepare_shape(&shape, &highlight);
            bindings.push(RegionBinding {
                region: spec.id.clone(),
                category: spec.category.clone(),
                name: spec.display_name(),
                shape,
                labels: Vec::new(),
                snapshot: StyleSnapshot::default(),
            });
        }

        let mut candidates: Vec<E> = Vec::new();
        let mut collect = |found: Vec<E>| {
            for el in found {
                if !candidates.iter().any(|c| c.same_element(&el)) {
                    candidates.push(el);
                }
            }
        };
        for sel in config.lookup.selectors(LabelScope::Embedded) {
            collect(svg.query_all(&sel));
        }
        if let Some(host) = host {
            for sel in config.lookup.selectors(LabelScope::Host) {
                collect(host.query_all(&sel));
            }
        }

        let known: Vec<RegionId> = config.regions.ids().cloned().collect();
        for el in candidates {
            if bindings.iter().any(|b| b.shape.same_element(&el)) {
                continue;
            }
            let Some(region) = config.lookup.infer_region(&el, &known) else {
                continue;
            };
            if let Some(binding) = bindings.iter_mut().find(|b| b.region == region) {
                binding.labels.push(el);
            }
        }

        for binding in &mut bindings {
            binding.snapshot = StyleSnapshot::capture(&binding.shape);
            for label in &binding.labels {
                make_label_clickable(label, &highlight);
            }
            report.regions_bound.push(binding.region.clone());
            if binding.labels.is_empty() {
                report.unlabeled_regions.push(binding.region.clone());
            } else {
                report.label_groups += 1;
                report.labels_bound += binding.labels.len();
            }
        }

        let mut controller = Self {
            config: highlight,
            bindings,
            hover_label,
            active: None,
            clear_generation: 0,
            pending_clear: None,
        };
        controller.restore_all();
        (controller, report)
    }

    pub fn bindings(&self) -> &[RegionBinding<E>] {
        &self.bindings
    }

    pub fn clear_delay_ms(&self) -> u32 {
        self.config.clear_delay_ms
    }

    pub fn active_region(&self) -> Option<&RegionId> {
        self.active.map(|i| &self.bindings[i].region)
    }

    pub fn pending_clear(&self) -> Option<ClearTicket> {
        self.pending_clear
    }

    /// Pointer entered the shape or a label of region `index`.
    ///
    /// Cancels any pending clear. Returns `false` for an unknown index.
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        if index >= self.bindings.len() {
            return false;
        }
        self.cancel_pending_clear();
        if let Some(prev) = self.active
            && prev != index
        {
            let b = &self.bindings[prev];
            b.snapshot.restore(&b.shape);
        }
        self.apply_active(index);
        self.active = Some(index);
        true
    }

    /// Pointer left the shape or a label of region `index`.
    ///
    /// Supersedes any earlier ticket; the caller fires the returned ticket
    /// after [`clear_delay_ms`](Self::clear_delay_ms).
    pub fn pointer_leave(&mut self, index: usize) -> Option<ClearTicket> {
        if index >= self.bindings.len() {
            return None;
        }
        self.clear_generation = self.clear_generation.wrapping_add(1);
        let ticket = ClearTicket(Handle::new(index as u32, self.clear_generation));
        self.pending_clear = Some(ticket);
        Some(ticket)
    }

    /// Debounce expired. Restores everything unless the ticket is stale or
    /// the pointer is back over the region's shape or one of its labels.
    ///
    /// Returns `true` if the highlight was cleared.
    pub fn fire_clear(&mut self, ticket: ClearTicket) -> bool {
        if self.pending_clear.is_none() || !ticket.0.is_current(self.clear_generation) {
            return false;
        }
        self.pending_clear = None;
        let Some(binding) = self.bindings.get(ticket.region_index()) else {
            return false;
        };
        let hovering =
            binding.shape.is_hovered() || binding.labels.iter().any(|l| l.is_hovered());
        if hovering {
            return false;
        }
        self.restore_all();
        true
    }

    /// Region `index` was clicked; the caller prevents the default action.
    pub fn click(&self, index: usize) -> Option<Navigation> {
        let binding = self.bindings.get(index)?;
        Some(Navigation {
            region: binding.region.clone(),
            category: binding.category.clone(),
            url: collection_url(&binding.category),
        })
    }

    /// A click inside the map that hit no region or label.
    ///
    /// Returns `true` if a region was active.
    pub fn background_click(&mut self) -> bool {
        self.cancel_pending_clear();
        let was_active = self.active.is_some();
        self.restore_all();
        was_active
    }

    /// Restores every shape and hides the overlay; used on page teardown.
    pub fn teardown(&mut self) {
        self.cancel_pending_clear();
        self.restore_all();
    }

    fn cancel_pending_clear(&mut self) {
        self.clear_generation = self.clear_generation.wrapping_add(1);
        self.pending_clear = None;
    }

    fn apply_active(&self, index: usize) {
        let cfg = &self.config;
        let active = &self.bindings[index];

        if let Some(label) = &self.hover_label {
            label.show(&active.name);
        }

        for (i, b) in self.bindings.iter().enumerate() {
            if i != index {
                b.shape.set_style_property("opacity", &cfg.dim_opacity);
            }
        }

        let shape = &active.shape;
        shape.set_style_property("opacity", &cfg.active_opacity);
        shape.set_attribute("stroke", &cfg.active_stroke);
        shape.set_attribute("stroke-width", &cfg.active_stroke_width);
        shape.set_style_property("filter", &cfg.active_filter);
        shape.set_style_property("transform", "none");
        shape.set_style_property("transform-origin", "");
    }

    fn restore_all(&mut self) {
        for b in &self.bindings {
            b.snapshot.restore(&b.shape);
        }
        if let Some(label) = &self.hover_label {
            label.hide();
        }
        self.active = None;
    }
}

fn needs_hit_fill<E: MapElement>(el: &E) -> bool {
    match el.attribute("fill") {
        None => true,
        Some(fill) => fill.trim().is_empty() || fill.trim() == "none",
    }
}

fn prepare_shape<E: MapElement>(shape: &E, cfg: &HighlightConfig) {
    if needs_hit_fill(shape) {
        shape.set_attribute("fill", &cfg.hit_fill);
    }
    shape.set_style_property("pointer-events", "all");
    shape.set_style_property("cursor", "pointer");
    shape.set_style_property("transition", &cfg.transition);
}

fn make_label_clickable<E: MapElement>(label: &E, cfg: &HighlightConfig) {
    label.set_style_property("pointer-events", "auto");
    label.set_style_property("cursor", "pointer");
    if label.tag_name().eq_ignore_ascii_case("text") && needs_hit_fill(label) {
        label.set_attribute("fill", &cfg.hit_fill);
    }
}
