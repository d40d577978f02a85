//! Stacked message windows.

use mtk_core::logging::targets;
use mtk_render::{Point, Renderer, Transform2D};

use super::message_window::MessageWindow;
use crate::widget::{UpdateContext, Widget};

/// An ordered stack of messages where only the newest one responds.
///
/// Each update makes the last message in the queue active and gives it
/// focus; every other open message is disabled. Dismissed messages are
/// dropped from the queue, so dismissing the top message hands the input
/// to the one below it on the next update.
///
/// # Example
///
/// ```
/// use mtk::widget::widgets::{MessageQueue, MessageWindow};
/// use mtk::widget::{FocusRegistry, FrameInput, UpdateContext, WidgetSize};
/// use mtk::MonospaceMetrics;
///
/// let mut queue = MessageQueue::new();
/// queue.append(MessageWindow::new(WidgetSize::Medium, "first"));
/// queue.append(MessageWindow::new(WidgetSize::Medium, "second"));
///
/// let (input, metrics, mut focus) = (FrameInput::new(), MonospaceMetrics::new(), FocusRegistry::new());
/// queue.update(&mut UpdateContext::new(&input, &metrics, &mut focus));
///
/// assert!(queue.get(0).unwrap().is_disabled());
/// assert!(queue.get(1).unwrap().is_focused());
/// ```
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: Vec<MessageWindow>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a message on top of the stack.
    pub fn append(&mut self, message: MessageWindow) {
        self.messages.push(message);
    }

    /// Remove the message at `index`.
    pub fn remove(&mut self, index: usize) -> Option<MessageWindow> {
        (index < self.messages.len()).then(|| self.messages.remove(index))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MessageWindow> {
        self.messages.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MessageWindow> {
        self.messages.get_mut(index)
    }

    pub fn messages(&self) -> &[MessageWindow] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageWindow> {
        self.messages.iter()
    }

    /// The message receiving input: the last one, if it is open.
    pub fn active(&self) -> Option<&MessageWindow> {
        self.messages.last().filter(|m| m.is_open())
    }

    /// Check whether any message was last drawn over `point`.
    pub fn contains_position(&self, point: Point) -> bool {
        self.messages.iter().any(|m| m.draw_area().contains(point))
    }

    fn purge(&mut self) {
        let before = self.messages.len();
        self.messages.retain(|m| !m.is_dismissed());
        let removed = before - self.messages.len();
        if removed > 0 {
            tracing::debug!(target: targets::MESSAGE, removed, remaining = self.messages.len(), "dismissed messages removed");
        }
    }

    /// Activate the top message, disable the others and update the open ones.
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.purge();
        let last = self.messages.len().saturating_sub(1);
        for (index, message) in self.messages.iter_mut().enumerate() {
            if !message.is_open() {
                continue;
            }
            if index == last {
                message.set_active(true);
                ctx.focus().focus_handle(message.focus_handle());
            } else {
                message.set_active(false);
            }
            message.update(ctx);
        }
        self.purge();
    }

    /// Draw every open message in queue order, oldest at the bottom.
    pub fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D) {
        for message in self.messages.iter_mut().filter(|m| m.is_open()) {
            message.draw(renderer, transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{FocusRegistry, FrameInput, WidgetSize};
    use mtk_render::{MonospaceMetrics, RecordingRenderer};

    fn queue(texts: &[&str]) -> MessageQueue {
        let mut queue = MessageQueue::new();
        for text in texts {
            queue.append(MessageWindow::new(WidgetSize::Medium, text));
        }
        queue
    }

    fn update(queue: &mut MessageQueue, focus: &mut FocusRegistry) {
        let input = FrameInput::new();
        let metrics = MonospaceMetrics::new();
        queue.update(&mut UpdateContext::new(&input, &metrics, focus));
    }

    #[test]
    fn test_only_last_is_active() {
        let mut focus = FocusRegistry::new();
        let mut queue = queue(&["m1", "m2", "m3"]);
        update(&mut queue, &mut focus);

        assert!(queue.get(0).unwrap().is_disabled());
        assert!(queue.get(1).unwrap().is_disabled());
        let top = queue.get(2).unwrap();
        assert!(!top.is_disabled());
        assert!(top.is_focused());
        assert!(focus.holds(top.focus_handle()));
    }

    #[test]
    fn test_dismissing_top_promotes_next() {
        let mut focus = FocusRegistry::new();
        let mut queue = queue(&["m1", "m2", "m3"]);
        update(&mut queue, &mut focus);

        queue.get_mut(2).unwrap().accept();
        update(&mut queue, &mut focus);

        assert_eq!(queue.len(), 2);
        let top = queue.get(1).unwrap();
        assert!(!top.is_disabled());
        assert!(top.is_focused());
        assert!(queue.get(0).unwrap().is_disabled());
    }

    #[test]
    fn test_dismissed_in_middle_is_removed() {
        let mut focus = FocusRegistry::new();
        let mut queue = queue(&["m1", "m2", "m3"]);
        queue.get_mut(0).unwrap().cancel();
        queue.get_mut(1).unwrap().cancel();
        update(&mut queue, &mut focus);
        assert_eq!(queue.len(), 1);
        assert!(queue.active().unwrap().is_focused());
    }

    #[test]
    fn test_draws_open_messages_only() {
        let mut queue = queue(&["m1", "m2"]);
        queue.get_mut(0).unwrap().show(false);
        let mut renderer = RecordingRenderer::new();
        queue.draw(&mut renderer, Transform2D::translate(200.0, 150.0));
        assert!(!renderer.texts().contains(&"m1"));
        assert!(renderer.texts().contains(&"m2"));
        assert!(queue.contains_position(Point::new(200.0, 150.0)));
        assert!(!queue.contains_position(Point::new(900.0, 900.0)));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut queue = queue(&["m1"]);
        assert!(queue.remove(3).is_none());
        assert!(queue.remove(0).is_some());
        assert!(queue.is_empty());
    }
}
