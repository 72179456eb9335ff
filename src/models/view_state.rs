//! Screen-level state of the admin session: which folder is shown and which
//! dialogs are open. Nothing here touches stored data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    AddFolder,
    AddRecord,
    Scan,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub selected: Option<usize>,
    add_folder: bool,
    add_record: bool,
    scan: bool,
}

impl ViewState {
    pub fn open(&mut self, dialog: Dialog) {
        *self.flag_mut(dialog) = true;
    }

    pub fn close(&mut self, dialog: Dialog) {
        *self.flag_mut(dialog) = false;
    }

    pub fn is_open(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::AddFolder => self.add_folder,
            Dialog::AddRecord => self.add_record,
            Dialog::Scan => self.scan,
        }
    }

    /// The dialog that receives free-form input, if any.
    /// Scan wins over the form dialogs since it is the one fed by the scanner.
    pub fn active_dialog(&self) -> Option<Dialog> {
        [Dialog::Scan, Dialog::AddRecord, Dialog::AddFolder]
            .into_iter()
            .find(|d| self.is_open(*d))
    }

    fn flag_mut(&mut self, dialog: Dialog) -> &mut bool {
        match dialog {
            Dialog::AddFolder => &mut self.add_folder,
            Dialog::AddRecord => &mut self.add_record,
            Dialog::Scan => &mut self.scan,
        }
    }
}
