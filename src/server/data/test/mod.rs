mod category;
mod event;
