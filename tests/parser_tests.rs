use std::io::Write;
use tempfile::NamedTempFile;
use vim_plugins_profile::parser::record::{extract_plugin_name, parse_exec_time, tokenize};
use vim_plugins_profile::parser::{parse_line, parse_log, read_log_lines, TimingRecord};

// Excerpt of a real `nvim --startuptime` log
const NVIM_LOG: &str = "\
times in msec
 clock   self+sourced   self:  sourced script
 clock   elapsed:              other lines

000.008  000.008: --- NVIM STARTING ---
000.137  000.129: locale set
012.771  000.281  000.281: sourcing /usr/share/nvim/runtime/filetype.lua
015.503  001.202  001.202: sourcing /home/me/.config/nvim/plugged/vim-surround/plugin/surround.vim
016.110  000.417  000.417: sourcing /home/me/.config/nvim/plugged/fzf.vim/plugin/fzf.vim
017.901  000.911  000.133: sourcing /home/me/.config/nvim/plugged/fzf.vim/autoload/fzf/vim.vim
020.000  000.004: --- NVIM STARTED ---
";

#[test]
fn test_parse_nvim_log() {
    let records: Vec<TimingRecord> = parse_log(NVIM_LOG, "plugged").collect();

    assert_eq!(
        records,
        vec![
            TimingRecord::new("vim-surround", 1.202),
            TimingRecord::new("fzf.vim", 0.417),
            TimingRecord::new("fzf.vim", 0.133),
        ]
    );
}

#[test]
fn test_read_log_lines_then_parse() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(NVIM_LOG.as_bytes()).unwrap();

    let lines = read_log_lines(file.path()).unwrap();
    let records: Vec<TimingRecord> = lines
        .iter()
        .filter_map(|line| parse_line(line, "plugged"))
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].plugin, "vim-surround");
}

#[test]
fn test_marker_with_special_characters() {
    let line = "1.0 1.0 0.5: sourcing /cfg/pack+[x]/my*plugin/plugin/a.vim";

    let record = parse_line(line, "pack+[x]").unwrap();
    assert_eq!(record.plugin, "my*plugin");
    assert!(parse_line(line, "pack.[x]").is_none());
}

#[test]
fn test_path_with_spaces() {
    let line = "1.0 1.0 0.5: sourcing /Users/Jane Doe/.vim/plugged/ale/plugin/ale.vim";

    let fields = tokenize(line).unwrap();
    assert_eq!(fields.path, "/Users/Jane Doe/.vim/plugged/ale/plugin/ale.vim");
    assert_eq!(extract_plugin_name(fields.path, "plugged"), Some("ale"));
}

#[test]
fn test_marker_appearing_twice_uses_first() {
    assert_eq!(
        extract_plugin_name("/a/plugged/outer/plugged/inner/x.vim", "plugged"),
        Some("outer")
    );
}

#[test]
fn test_exec_time_variants() {
    assert_eq!(parse_exec_time("001.202:"), Some(1.202));
    assert_eq!(parse_exec_time("5"), Some(5.0));
    assert_eq!(parse_exec_time(":"), None);
    assert_eq!(parse_exec_time(""), None);
}
