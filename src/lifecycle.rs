/// What `pagehide` means for the motion loop and relocation timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HideAction {
    /// The page went into the back-forward cache. The browser freezes
    /// animation frames and intervals and resumes them on restore.
    Keep,
    /// The page is being unloaded for good.
    Stop,
}

pub fn on_pagehide(persisted: bool) -> HideAction {
    if persisted {
        HideAction::Keep
    } else {
        HideAction::Stop
    }
}
