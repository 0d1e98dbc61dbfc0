use ratatui::layout::{Constraint, Rect};

use crate::config::Containers;
use crate::ui::adapter::ContainerId;
use crate::ui::components::utils::{split_horizontal, split_vertical};

/// Screen regions of the dashboard for one frame.
#[derive(Clone, Debug)]
pub struct DashboardLayout {
    pub selectors: [Rect; 3],
    pub main: Rect,
    pub pie: Rect,
    pub gauge: Rect,
    pub profile: Rect,
    pub status: Rect,
    containers: Containers,
}

impl DashboardLayout {
    pub fn compute(area: Rect, containers: &Containers) -> Self {
        let rows = split_vertical(
            area,
            &[
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(1),
            ],
        );
        let selectors = split_horizontal(
            rows[0],
            &[
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ],
        );
        let body = split_horizontal(
            rows[1],
            &[Constraint::Percentage(68), Constraint::Percentage(32)],
        );
        let side = split_vertical(
            body[1],
            &[
                Constraint::Percentage(45),
                Constraint::Length(3),
                Constraint::Min(3),
            ],
        );

        Self {
            selectors: [selectors[0], selectors[1], selectors[2]],
            main: body[0],
            pie: side[0],
            gauge: side[1],
            profile: side[2],
            status: rows[2],
            containers: containers.clone(),
        }
    }

    pub fn container_rects(&self) -> [(&ContainerId, Rect); 4] {
        [
            (&self.containers.main, self.main),
            (&self.containers.pie, self.pie),
            (&self.containers.gauge, self.gauge),
            (&self.containers.profile, self.profile),
        ]
    }

    pub fn rect_for(&self, container: &ContainerId) -> Option<Rect> {
        self.container_rects()
            .into_iter()
            .find(|(id, _)| *id == container)
            .map(|(_, rect)| rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn regions_fit_inside_the_frame() {
        let containers = Config::builtin().containers;
        let area = Rect::new(0, 0, 120, 40);

        let layout = DashboardLayout::compute(area, &containers);

        for (_, rect) in layout.container_rects() {
            assert!(area.union(rect) == area, "{rect:?} escapes {area:?}");
        }
        assert!(layout.main.width > layout.pie.width);
        assert_eq!(layout.gauge.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.rect_for(&containers.main), Some(layout.main));
        assert_eq!(layout.rect_for(&ContainerId::new("bar-chart")), None);
    }
}
