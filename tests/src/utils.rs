use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Header `ibnetdiscover` puts before the first device.
pub const DUMP_HEADER: &str = "\
#
# Topology file: generated on Tue May  7 10:12:41 2024
#
# Initiated from node 0002c903000c8f68 port 0002c903000c8f69

";

pub fn host_block(name: &str, guid: &str, switch: &str, switch_port: u32) -> String {
    format!(
        "vendid=0x2c9
devid=0x1003
sysimgguid=0x{guid}d
caguid=0x{guid}a
Ca\t2 \"{name}\"\t\t# \"{name} HCA-1\"
[1](2c9030{guid}b) \t\"{switch}\"[{switch_port}]\t\t# lid 3 lmc 0 \"MF0;switch\" lid 3 4xQDR
"
    )
}

pub fn switch_block(name: &str, guid: &str, hosts: &[&str]) -> String {
    let mut block = format!(
        "vendid=0x2c9
devid=0xcf08
sysimgguid=0x{guid}3
switchguid=0x{guid}0({guid}0)
Switch\t36 \"{name}\"\t\t# \"MF0;switch:IS5030/U1\" enhanced port 0 lid 3 lmc 0
"
    );
    for (idx, host) in hosts.iter().enumerate() {
        block.push_str(&format!(
            "[{}]\t\"{host}\"[1](2c903000c8f6b)\t\t# \"{host} HCA-1\" lid {} 4xQDR\n",
            idx + 1,
            idx + 4
        ));
    }
    block
}

/// A dump file inside its own temporary directory.
pub struct Fixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn new(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("failed to write fixture");
        Self { dir, path }
    }

    /// Header, then every block followed by a blank line.
    pub fn dump(name: &str, blocks: &[String]) -> Self {
        let mut contents = DUMP_HEADER.to_string();
        for block in blocks {
            contents.push_str(block);
            contents.push('\n');
        }
        Self::new(name, &contents)
    }

    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
