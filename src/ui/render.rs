use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::App;
use super::components::regions::{labels, rows_needed};
use super::components::{
	DetailContext, HeaderContext, ResultRow, render_detail, render_empty, render_failed,
	render_footer, render_header, render_loading, render_regions, render_results,
};
use super::state::LoadState;

const HEADER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const LIST_PANE_PERCENT: u16 = 45;

impl<'a> App<'a> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [header, body, footer] = Layout::vertical([
			Constraint::Length(HEADER_HEIGHT),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);
		let [left, right] = Layout::horizontal([
			Constraint::Percentage(LIST_PANE_PERCENT),
			Constraint::Min(1),
		])
		.areas(body);

		let title = self.title.render_at(Instant::now());
		let region = self.session.region();
		render_header(
			frame,
			header,
			HeaderContext {
				title: &title,
				shown: self.session.display_len(),
				total: self.session.total(),
				region: (!region.is_all()).then(|| region.label()),
				saved: self.session.saved().len(),
				theme: &self.theme,
			},
		);

		self.draw_list_pane(frame, left);

		let selected = self.session.selected();
		render_detail(
			frame,
			right,
			DetailContext {
				selected,
				saved: selected.is_some_and(|country| self.session.is_saved(&country.country_code)),
				comparison: self.session.comparison(),
				theme: &self.theme,
			},
		);

		render_footer(frame, footer, self.status.as_deref(), &self.theme);
	}

	fn draw_list_pane(&mut self, frame: &mut Frame, area: Rect) {
		let region_labels = labels(self.session.regions());
		let region_rows = rows_needed(&region_labels, area.width).min(area.height / 4);
		let [input, regions, _, list] = Layout::vertical([
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Length(region_rows),
			Constraint::Length(1),
			Constraint::Min(1),
		])
		.areas(area);

		self.search_input.render(frame, input);
		self.region_hitboxes = render_regions(
			frame,
			regions,
			self.session.regions(),
			self.session.region(),
			&self.theme,
		);

		self.list_area = Rect::default();
		match &self.load_state {
			LoadState::Loading => render_loading(frame, list, &self.throbber_state, &self.theme),
			LoadState::Failed(reason) => render_failed(frame, list, reason, &self.theme),
			LoadState::Ready if self.session.display_len() == 0 => {
				render_empty(frame, list, self.session.query(), &self.theme);
			}
			LoadState::Ready => {
				let selected = self
					.session
					.selected()
					.map(|country| country.country_code.as_str());
				let rows: Vec<ResultRow<'_>> = self
					.session
					.display()
					.into_iter()
					.map(|country| ResultRow {
						country,
						selected: selected == Some(country.country_code.as_str()),
						saved: self.session.is_saved(&country.country_code),
					})
					.collect();
				self.table_state.select(self.session.highlighted());
				render_results(frame, list, &mut self.table_state, &rows, &self.theme);
				self.list_area = list;
			}
		}
	}
}
