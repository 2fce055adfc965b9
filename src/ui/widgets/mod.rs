pub mod nav_menu;
