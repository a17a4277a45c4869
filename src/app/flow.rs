use std::fmt;

use rust_decimal::Decimal;

use crate::app::state::{Order, OrderTotals};
use crate::catalog::{MenuCatalog, MenuItem};
use crate::ui::navigation::{BackStack, Step};

/// User intents fed into the ordering state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Leave the Start screen for the entree menu.
    Start,
    /// Replace the selection for the current menu step.
    Select(MenuItem),
    /// Advance from a menu step to the next one.
    ConfirmSelection,
    /// Return to the previously visited step, keeping selections.
    Back,
    /// Abandon the order from any step.
    Cancel,
    /// Submit the order from Checkout.
    Complete,
}

/// What a dispatched event did to the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Navigated { from: Step, to: Step },
    Selected { step: Step, item: MenuItem },
    Cancelled { from: Step },
    /// Carries the submitted order; the flow itself is already back at Start and empty.
    Completed { order: Order, totals: OrderTotals },
    /// The event does not apply to `step`; nothing changed and nobody was notified.
    Ignored { step: Step },
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        !matches!(self, Transition::Ignored { .. })
    }
}

/// Read-only snapshot handed to renderers and subscribers.
#[derive(Debug, Clone, Copy)]
pub struct FlowView<'a> {
    pub step: Step,
    pub title: &'static str,
    pub can_go_back: bool,
    pub back_stack: &'a [Step],
    pub order: &'a Order,
    pub totals: OrderTotals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Transition, &FlowView<'_>)>;

/// Owns the navigation stack and the in-progress order for one customer session.
///
/// All mutation goes through [`OrderFlow::dispatch`]. Cancelling or completing collapses the
/// stack to Start and clears the order before any subscriber runs, so observers never see a
/// half-reset state.
pub struct OrderFlow {
    catalog: MenuCatalog,
    tax_rate: Decimal,
    stack: BackStack,
    order: Order,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl OrderFlow {
    pub fn new(catalog: MenuCatalog, tax_rate: Decimal) -> Self {
        Self {
            catalog,
            tax_rate,
            stack: BackStack::new(),
            order: Order::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn current_step(&self) -> Step {
        self.stack.current()
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn totals(&self) -> OrderTotals {
        self.order.totals(self.tax_rate)
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn back_stack(&self) -> &[Step] {
        self.stack.entries()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.depth() > 1
    }

    /// Catalog items offered on the current step; empty outside the menu steps.
    pub fn options(&self) -> &[MenuItem] {
        match self.current_step().category() {
            Some(category) => self.catalog.items(category),
            None => &[],
        }
    }

    pub fn view(&self) -> FlowView<'_> {
        view_of(&self.stack, &self.order, self.tax_rate)
    }

    /// Register a callback that runs after every applied transition.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Transition, &FlowView<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn dispatch(&mut self, event: FlowEvent) -> Transition {
        let step = self.current_step();
        let transition = self.apply(step, event);

        if transition.is_applied() {
            log::debug!("{step} -> {}: {transition}", self.current_step());
            let view = view_of(&self.stack, &self.order, self.tax_rate);
            for (_, subscriber) in self.subscribers.iter_mut() {
                subscriber(&transition, &view);
            }
        }

        transition
    }

    fn apply(&mut self, step: Step, event: FlowEvent) -> Transition {
        match event {
            FlowEvent::Start if step == Step::Start => self.navigate(step, Step::EntreeMenu),
            FlowEvent::Select(item) => match step.category() {
                Some(category) if category == item.category => {
                    self.order.select(item.clone());
                    Transition::Selected { step, item }
                }
                Some(category) => {
                    log::warn!(
                        "ignoring {} selection `{}` on the {} menu",
                        item.category,
                        item.name,
                        category
                    );
                    Transition::Ignored { step }
                }
                None => Transition::Ignored { step },
            },
            FlowEvent::ConfirmSelection => match step.next() {
                Some(next) => self.navigate(step, next),
                None => Transition::Ignored { step },
            },
            FlowEvent::Back => match self.stack.pop() {
                Some(to) => Transition::Navigated { from: step, to },
                None => Transition::Ignored { step },
            },
            FlowEvent::Cancel => {
                if step == Step::Start && self.order.is_empty() {
                    return Transition::Ignored { step };
                }
                self.reset();
                Transition::Cancelled { from: step }
            }
            FlowEvent::Complete if step == Step::Checkout => {
                let order = std::mem::take(&mut self.order);
                let totals = order.totals(self.tax_rate);
                self.reset();
                log::info!(
                    "order submitted: {} item(s), total {}",
                    order.items().count(),
                    totals.total
                );
                Transition::Completed { order, totals }
            }
            FlowEvent::Start | FlowEvent::Complete => Transition::Ignored { step },
        }
    }

    fn navigate(&mut self, from: Step, to: Step) -> Transition {
        self.stack.push(to);
        Transition::Navigated { from, to }
    }

    fn reset(&mut self) {
        self.stack.pop_to(Step::Start, false);
        self.order.reset();
    }
}

impl fmt::Debug for OrderFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderFlow")
            .field("step", &self.current_step())
            .field("stack", &self.stack)
            .field("order", &self.order)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Navigated { from, to } => write!(f, "navigated {from} -> {to}"),
            Transition::Selected { step, item } => write!(f, "selected `{}` on {step}", item.name),
            Transition::Cancelled { from } => write!(f, "cancelled from {from}"),
            Transition::Completed { totals, .. } => write!(f, "completed, total {}", totals.total),
            Transition::Ignored { step } => write!(f, "ignored on {step}"),
        }
    }
}

fn view_of<'a>(stack: &'a BackStack, order: &'a Order, tax_rate: Decimal) -> FlowView<'a> {
    let step = stack.current();
    FlowView {
        step,
        title: step.title(),
        can_go_back: stack.depth() > 1,
        back_stack: stack.entries(),
        order,
        totals: order.totals(tax_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::config::DEFAULT_TAX_RATE;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn flow() -> OrderFlow {
        OrderFlow::new(MenuCatalog::builtin(), DEFAULT_TAX_RATE)
    }

    fn option(flow: &OrderFlow, idx: usize) -> MenuItem {
        flow.options()[idx].clone()
    }

    fn advance_to(flow: &mut OrderFlow, target: Step) {
        if target == Step::Start {
            return;
        }
        flow.dispatch(FlowEvent::Start);
        while flow.current_step() != target {
            let item = option(flow, 0);
            flow.dispatch(FlowEvent::Select(item));
            flow.dispatch(FlowEvent::ConfirmSelection);
        }
    }

    #[test]
    fn full_order_then_cancel_returns_to_empty_start() {
        let mut flow = flow();
        assert_eq!(flow.current_step(), Step::Start);

        flow.dispatch(FlowEvent::Start);
        assert_eq!(flow.current_step(), Step::EntreeMenu);

        let a = option(&flow, 0);
        flow.dispatch(FlowEvent::Select(a.clone()));
        flow.dispatch(FlowEvent::ConfirmSelection);
        assert_eq!(flow.current_step(), Step::SideDishMenu);

        let b = option(&flow, 1);
        flow.dispatch(FlowEvent::Select(b.clone()));
        flow.dispatch(FlowEvent::ConfirmSelection);
        assert_eq!(flow.current_step(), Step::AccompanimentMenu);

        let c = option(&flow, 2);
        flow.dispatch(FlowEvent::Select(c.clone()));
        flow.dispatch(FlowEvent::ConfirmSelection);
        assert_eq!(flow.current_step(), Step::Checkout);

        assert_eq!(flow.order().entree(), Some(&a));
        assert_eq!(flow.order().side_dish(), Some(&b));
        assert_eq!(flow.order().accompaniment(), Some(&c));

        let transition = flow.dispatch(FlowEvent::Cancel);
        assert_eq!(transition, Transition::Cancelled { from: Step::Checkout });
        assert_eq!(flow.current_step(), Step::Start);
        assert!(flow.order().is_empty());
        assert_eq!(flow.back_stack(), &[Step::Start]);
    }

    #[test]
    fn cancel_from_every_step_collapses_to_start() {
        for step in Step::ALL.into_iter().filter(|step| *step != Step::Start) {
            let mut flow = flow();
            advance_to(&mut flow, step);
            assert_eq!(flow.current_step(), step);

            flow.dispatch(FlowEvent::Cancel);

            assert_eq!(flow.current_step(), Step::Start, "cancel from {step}");
            assert_eq!(flow.order(), &Order::new(), "cancel from {step}");
            assert_eq!(flow.back_stack(), &[Step::Start], "cancel from {step}");
        }
    }

    #[test]
    fn cancel_from_entree_menu_leaves_single_entry_stack() {
        let mut flow = flow();
        flow.dispatch(FlowEvent::Start);
        let item = option(&flow, 3);
        flow.dispatch(FlowEvent::Select(item));

        flow.dispatch(FlowEvent::Cancel);

        assert_eq!(flow.current_step(), Step::Start);
        assert!(flow.order().is_empty());
        assert_eq!(flow.back_stack().len(), 1);
        assert_eq!(flow.totals(), OrderTotals::zero());
    }

    #[test]
    fn confirm_without_selection_is_allowed() {
        let mut flow = flow();
        flow.dispatch(FlowEvent::Start);
        flow.dispatch(FlowEvent::ConfirmSelection);
        flow.dispatch(FlowEvent::ConfirmSelection);
        flow.dispatch(FlowEvent::ConfirmSelection);

        assert_eq!(flow.current_step(), Step::Checkout);
        assert!(flow.order().is_empty());
        assert_eq!(flow.back_stack().len(), 5);
    }

    #[test]
    fn complete_returns_receipt_and_resets() {
        let mut flow = flow();
        advance_to(&mut flow, Step::Checkout);
        let expected_totals = flow.totals();
        let expected_order = flow.order().clone();

        match flow.dispatch(FlowEvent::Complete) {
            Transition::Completed { order, totals } => {
                assert_eq!(order, expected_order);
                assert_eq!(totals, expected_totals);
                assert_eq!(order.items().count(), 3);
            }
            other => panic!("unexpected transition: {other:?}"),
        }

        assert_eq!(flow.current_step(), Step::Start);
        assert!(flow.order().is_empty());
        assert_eq!(flow.back_stack(), &[Step::Start]);
    }

    #[test]
    fn events_outside_their_step_are_ignored() {
        let mut flow = flow();
        assert_eq!(
            flow.dispatch(FlowEvent::ConfirmSelection),
            Transition::Ignored { step: Step::Start }
        );
        assert_eq!(
            flow.dispatch(FlowEvent::Complete),
            Transition::Ignored { step: Step::Start }
        );
        assert_eq!(
            flow.dispatch(FlowEvent::Back),
            Transition::Ignored { step: Step::Start }
        );
        assert_eq!(
            flow.dispatch(FlowEvent::Cancel),
            Transition::Ignored { step: Step::Start }
        );

        flow.dispatch(FlowEvent::Start);
        assert_eq!(
            flow.dispatch(FlowEvent::Start),
            Transition::Ignored { step: Step::EntreeMenu }
        );

        let side = flow.catalog().items(Category::SideDish)[0].clone();
        assert_eq!(
            flow.dispatch(FlowEvent::Select(side)),
            Transition::Ignored { step: Step::EntreeMenu }
        );
        assert!(flow.order().is_empty());
    }

    #[test]
    fn back_pops_in_visit_order_and_keeps_selections() {
        let mut flow = flow();
        advance_to(&mut flow, Step::AccompanimentMenu);
        let entree = flow.order().entree().cloned();

        assert_eq!(
            flow.dispatch(FlowEvent::Back),
            Transition::Navigated {
                from: Step::AccompanimentMenu,
                to: Step::SideDishMenu
            }
        );
        flow.dispatch(FlowEvent::Back);
        assert_eq!(flow.current_step(), Step::EntreeMenu);
        flow.dispatch(FlowEvent::Back);
        assert_eq!(flow.current_step(), Step::Start);
        assert!(!flow.can_go_back());
        assert_eq!(flow.order().entree().cloned(), entree);

        // A stale order left behind by going back can still be cleared from Start.
        assert_eq!(
            flow.dispatch(FlowEvent::Cancel),
            Transition::Cancelled { from: Step::Start }
        );
        assert!(flow.order().is_empty());
    }

    #[test]
    fn subscribers_see_reset_state_once_per_applied_event() {
        let mut flow = flow();
        let seen: Rc<RefCell<Vec<(Step, bool, usize)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        flow.subscribe(move |_, view| {
            sink.borrow_mut()
                .push((view.step, view.order.is_empty(), view.back_stack.len()));
        });

        flow.dispatch(FlowEvent::Start);
        let item = option(&flow, 0);
        flow.dispatch(FlowEvent::Select(item));
        flow.dispatch(FlowEvent::Complete);
        flow.dispatch(FlowEvent::Cancel);

        assert_eq!(
            *seen.borrow(),
            vec![
                (Step::EntreeMenu, true, 2),
                (Step::EntreeMenu, false, 2),
                (Step::Start, true, 1),
            ]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut flow = flow();
        let count = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&count);
        let id = flow.subscribe(move |_, _| *counter.borrow_mut() += 1);

        flow.dispatch(FlowEvent::Start);
        assert!(flow.unsubscribe(id));
        assert!(!flow.unsubscribe(id));
        flow.dispatch(FlowEvent::ConfirmSelection);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn selecting_extreme_prices_does_not_panic() {
        let huge = Decimal::from_str_exact("30000000000000000000000000000").expect("decimal");
        let catalog = MenuCatalog::new(
            vec![MenuItem::new(Category::Entree, "A", "", huge)],
            vec![MenuItem::new(Category::SideDish, "B", "", huge)],
            vec![MenuItem::new(Category::Accompaniment, "C", "", huge)],
        );
        let mut flow = OrderFlow::new(catalog, DEFAULT_TAX_RATE);

        advance_to(&mut flow, Step::Checkout);

        assert_eq!(flow.order().items().count(), 3);
        assert_eq!(flow.totals().total, Decimal::MAX);
    }

    #[test]
    fn options_follow_the_current_step() {
        let mut flow = flow();
        assert!(flow.options().is_empty());

        flow.dispatch(FlowEvent::Start);
        assert_eq!(flow.options(), flow.catalog().items(Category::Entree));

        flow.dispatch(FlowEvent::ConfirmSelection);
        assert_eq!(flow.options(), flow.catalog().items(Category::SideDish));

        flow.dispatch(FlowEvent::ConfirmSelection);
        flow.dispatch(FlowEvent::ConfirmSelection);
        assert!(flow.options().is_empty());
        assert_eq!(flow.view().title, "Checkout");
    }
}
