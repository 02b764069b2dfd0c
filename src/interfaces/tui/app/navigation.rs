//! Navigation and selection logic

use super::App;
use crate::dashboard::{QueryAction, SortSpec};

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.dashboard.rows().len();
        if self.selected_index < len.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the current page
    pub fn clamp_selection(&mut self) {
        let len = self.dashboard.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// 加载下一页
    pub fn next_page(&mut self) {
        if let Some(action) = self.dashboard.next_page_action() {
            self.selected_index = 0;
            self.apply_query(action);
        }
    }

    /// 加载上一页
    pub fn prev_page(&mut self) {
        if let Some(action) = self.dashboard.prev_page_action() {
            self.selected_index = 0;
            self.apply_query(action);
        }
    }

    pub fn cycle_page_size(&mut self) {
        let next = self.dashboard.query().page_size.next();
        self.selected_index = 0;
        self.apply_query(QueryAction::SetPageSize(next));
        self.set_status(format!("Page size: {}", next.value()));
    }

    /// Cycle through sort columns, keeping the direction
    pub fn cycle_sort_column(&mut self) {
        let sort = self.dashboard.query().sort;
        let next = SortSpec::new(sort.field.next(), sort.order);
        self.apply_query(QueryAction::SetSort(next));
        self.report_sort();
    }

    /// Toggle sort direction
    pub fn toggle_sort_direction(&mut self) {
        let sort = self.dashboard.query().sort;
        let next = SortSpec::new(sort.field, sort.order.toggle());
        self.apply_query(QueryAction::SetSort(next));
        self.report_sort();
    }

    fn report_sort(&mut self) {
        let sort = self.dashboard.query().sort;
        self.set_status(format!(
            "Sorted by {} {}",
            sort.field.label(),
            sort.order.arrow()
        ));
    }

    pub fn cycle_category(&mut self) {
        let next = self
            .dashboard
            .query()
            .category
            .cycle(self.dashboard.categories());
        self.selected_index = 0;
        self.set_status(format!("Category: {}", next.as_param()));
        self.apply_query(QueryAction::SetCategoryFilter(next));
    }

    pub fn clear_filters(&mut self) {
        self.search_input.clear();
        self.search_mode = false;
        self.selected_index = 0;
        self.apply_query(QueryAction::ClearFilters);
        self.set_status("Filters cleared".to_string());
    }

    // ============ inline search ============

    pub fn begin_search(&mut self) {
        self.search_mode = true;
        self.search_input = self.dashboard.query().search_term.clone();
    }

    /// Push the edited term to the query; each keystroke refetches
    pub fn update_search(&mut self) {
        self.selected_index = 0;
        self.apply_query(QueryAction::SetSearchTerm(self.search_input.clone()));
    }

    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.search_input.clear();
        self.update_search();
    }
}
