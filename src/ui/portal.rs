//! Deferred attachment of flyout content to the document root.
//!
//! Content rendered outside the component tree must not be attached before
//! the host finished its first render, otherwise server and client output
//! diverge. [`Portal`] keeps the content behind a [`MountGate`] and only
//! hands it out once the host called [`Portal::mounted`].

/// One-way latch flipped when the host is ready to accept attachments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountGate {
    ready: bool,
}

impl MountGate {
    pub const fn new() -> Self {
        Self { ready: false }
    }

    /// Flips the latch. Returns `true` only for the call that opened it.
    pub fn mark_ready(&mut self) -> bool {
        !std::mem::replace(&mut self.ready, true)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Host attachment point content is rendered into.
pub trait PortalRoot<C: ?Sized> {
    fn attach(&mut self, root_id: &str, content: &C);
}

/// What a ready portal renders: its content, placed at `root_id`.
#[derive(Debug, PartialEq, Eq)]
pub struct PortalOutput<'a, C> {
    pub root_id: &'a str,
    pub content: &'a C,
}

/// Content waiting to be attached to the document root.
#[derive(Debug)]
pub struct Portal<C> {
    gate: MountGate,
    root_id: String,
    children: C,
}

impl<C> Portal<C> {
    pub fn new(root_id: impl Into<String>, children: C) -> Self {
        Self {
            gate: MountGate::new(),
            root_id: root_id.into(),
            children,
        }
    }

    /// Readiness signal from the host. Only the first call has an effect.
    pub fn mounted(&mut self) {
        if self.gate.mark_ready() {
            log::debug!("portal into #{} is ready", self.root_id);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Replaces the content. Readiness is unaffected.
    pub fn set_children(&mut self, children: C) {
        self.children = children;
    }

    /// Empty until the host is ready, then the content at the root.
    pub fn render(&self) -> Option<PortalOutput<'_, C>> {
        self.gate.is_ready().then(|| PortalOutput {
            root_id: &self.root_id,
            content: &self.children,
        })
    }

    /// Attaches the content to `root` if ready. Returns whether it did.
    pub fn attach_to<R>(&self, root: &mut R) -> bool
    where
        R: PortalRoot<C> + ?Sized,
    {
        match self.render() {
            Some(output) => {
                root.attach(output.root_id, output.content);
                true
            }
            None => false,
        }
    }
}
